//! A bidirectional map for sharing between threads.
//!
//! [`BiMap`] keeps a key→value map and its value→key inverse behind one `RwLock`, so that no
//! reader can ever see one direction updated without the other. Keys and values are both unique:
//! inserting a pair that collides on either side replaces the old pairing.
//!
//! A map can be frozen with [`BiMap::make_immutable`]. After that, mutations return
//! [`Error::Immutable`] instead of changing anything, and lookups carry on as normal.
//!
//! To do several things under one lock, use [`BiMap::read`], [`BiMap::write`] or
//! [`BiMap::batch`]; see the [`guard`] module.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use syncbimap::BiMap;
//!
//! let ports = Arc::new(BiMap::new());
//! let handles: Vec<_> = (0..4u16).map(|i| {
//!     let ports = ports.clone();
//!     thread::spawn(move || ports.insert(format!("worker-{}", i), 8000 + i).unwrap())
//! }).collect();
//! for h in handles { h.join().unwrap(); }
//!
//! assert_eq!(ports.len(), 4);
//! assert_eq!(ports.get_inverse(&8002).as_deref(), Some("worker-2"));
//! ```

pub mod bimap;
pub mod error;
pub mod guard;
pub mod pairs;


pub use crate::bimap::BiMap;
pub use crate::error::{Error, Result};
pub use crate::guard::{Read, Write};
pub use crate::pairs::Pairs;
