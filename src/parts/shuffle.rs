//! Random permutation of parts.

use std::sync::{Mutex, PoisonError};

use crate::parts::Part;
use crate::random;

/// Rearranges its parts uniformly at random before each append.
///
/// The reordering is done in place and persists across appends. The child
/// list sits behind a lock held for the whole shuffle-plus-append, so
/// concurrent appends on one instance serialize.
#[derive(Debug)]
pub struct Shuffle {
    parts: Mutex<Vec<Part>>,
}

impl Shuffle {
    pub(crate) fn append(&self, out: &mut Vec<u8>) {
        let mut parts = self.parts.lock().unwrap_or_else(PoisonError::into_inner);

        // Fisher-Yates, walking down from the last index.
        for i in (1..parts.len()).rev() {
            let j = random::uniform_u32(i as u32 + 1) as usize;
            parts.swap(i, j);
        }

        for part in parts.iter() {
            part.append(out);
        }
    }
}

impl Clone for Shuffle {
    fn clone(&self) -> Shuffle {
        let parts = self.parts.lock().unwrap_or_else(PoisonError::into_inner);
        Shuffle {
            parts: Mutex::new(parts.clone()),
        }
    }
}

impl Part {
    /// Returns a part that appends `parts` in a uniformly random order,
    /// every permutation equally likely.
    pub fn shuffle(parts: Vec<Part>) -> Part {
        Part::Shuffle(Shuffle {
            parts: Mutex::new(parts),
        })
    }
}
