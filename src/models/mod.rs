pub mod order;

pub use order::{EnrichedOrder, LineItem, Order, OrderPayload, OrderReceipt, ParseError};
