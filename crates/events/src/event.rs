use chrono::{DateTime, Utc};

/// Something that happened to a storefront aggregate.
///
/// Event types are dotted names, `<context>.<aggregate>.<what>`, e.g.
/// `sales.cart.item_added`.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// Business time.
    fn occurred_at(&self) -> DateTime<Utc>;

    /// `<context>.<aggregate>` part of the event type.
    fn stream(&self) -> &'static str {
        let event_type = self.event_type();
        event_type
            .rsplit_once('.')
            .map(|(stream, _)| stream)
            .unwrap_or(event_type)
    }
}

/// Event types of a batch, in order. Used for log lines.
pub fn event_types<E: Event>(events: &[E]) -> Vec<&'static str> {
    events.iter().map(Event::event_type).collect()
}
