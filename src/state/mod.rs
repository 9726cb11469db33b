mod persistence;
mod session;
mod session_state;

pub use persistence::{FileStore, MemoryStore, Snapshot, SnapshotStore};
pub use session::{PaintSession, Repaint};
pub use session_state::SessionState;
