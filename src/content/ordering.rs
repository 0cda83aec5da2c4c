/*!
 * Render-time reduction shared by sections and config item lists:
 * drop inactive entries, then order by the `order` field.
 */

/// Items that carry an explicit render position and an activity flag
pub trait Orderable {
    /// Render position, ascending
    fn order(&self) -> i64;

    /// Raw activity flag; `None` means the backend did not send one
    fn active_flag(&self) -> Option<bool>;

    /// Only an explicit `false` deactivates an item
    fn is_active(&self) -> bool {
        self.active_flag() != Some(false)
    }
}

/// Active items sorted by `order`. Items with equal order keep their input
/// position.
pub fn active_in_order<T: Orderable>(items: &[T]) -> Vec<&T> {
    let mut active: Vec<&T> = items.iter().filter(|item| item.is_active()).collect();
    // sort_by_key is stable
    active.sort_by_key(|item| item.order());
    active
}
