//! Domain models for the admin panel.
//!
//! Each record type is split into its *fields* struct (the document body a
//! caller supplies on create, and the shape every stored document must
//! validate against on read) and the full record struct that adds the
//! store-assigned identity and timestamps.

pub mod customer;
pub mod note;
pub mod service_history;
pub mod session;

pub use customer::{Address, Customer, CustomerFields, CustomerPatch, MowerDetails};
pub use note::{Note, NoteFields, NotePatch};
pub use service_history::{ServiceFields, ServiceHistory, ServiceHistoryPatch};
pub use session::{CurrentUser, session_keys};
