/// A named unit of application state.
///
/// Every store exposes its whole state through [`Store::state`], and can be brought back to its
/// default state with [`Store::reset`].
pub trait Store {
    /// The name this store is known by (e.g. in logs)
    const NAME: &'static str;

    /// The type of the state this store owns
    type State: ?Sized;

    /// Returns the whole current state
    fn state(&self) -> &Self::State;

    /// Restore the default state.
    /// This replaces the entire value.
    fn reset(&mut self);
}
