mod spend_engine;

pub use spend_engine::SpendEngine;
