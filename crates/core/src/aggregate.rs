//! Aggregate root trait for event-sourced domain models (cart, orders).

/// Aggregate root marker + minimal interface.
///
/// Kept small so storefront modules decide how they model state transitions
/// without bringing in any infrastructure concerns.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state
    /// (number of events applied).
    fn version(&self) -> u64;
}

/// Aggregate execution semantics (pure, deterministic).
///
/// - **Decision logic**: `handle(&self, cmd)` returns events.
/// - **State mutation**: `apply(&mut self, event)` evolves state.
///
/// Aggregates must not perform IO or side effects. They should only return events
/// describing what happened.
pub trait Aggregate: AggregateRoot {
    type Command: Clone + core::fmt::Debug;
    type Event: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    /// Evolve in-memory state from a single event.
    fn apply(&mut self, event: &Self::Event);

    /// Decide which events to emit given the current state and a command.
    ///
    /// This must not mutate state. State evolution is done through `apply`.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;

    /// Handle a command and apply every resulting event in order.
    fn execute(&mut self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let events = self.handle(command)?;
        for event in &events {
            self.apply(event);
        }
        Ok(events)
    }
}
