//! Element identity.
//!
//! Every element gets a stable string name (`element_0`, `element_1`, ...)
//! minted at creation and kept for the life of the document, including
//! across serialization. Names are interned: an [`ElementId`] is a small
//! `Copy` index into a process-wide string table, so ids compare and hash
//! like integers while still reading as names in JSON and logs.

use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

static NAMES: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Monotonic counter behind [`ElementId::generate`].
static NEXT: AtomicU64 = AtomicU64::new(0);

/// Interned identifier of one canvas element.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(Spur);

impl ElementId {
    /// Id for a given name, interning it on first use. The same name always
    /// yields the same id.
    pub fn intern(name: &str) -> Self {
        Self(NAMES.get_or_intern(name))
    }

    /// Mint the next `element_{n}` id. Uniqueness holds within a process;
    /// documents loaded from elsewhere keep whatever names they carry.
    pub fn generate() -> Self {
        let n = NEXT.fetch_add(1, Ordering::Relaxed);
        Self::intern(&format!("element_{n}"))
    }

    /// The element's name.
    pub fn as_str(&self) -> &str {
        NAMES.resolve(&self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElementId").field(&self.as_str()).finish()
    }
}

// Documents serialize ids as their plain names, not interner indices —
// indices are meaningless outside the process that produced them.

impl Serialize for ElementId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ElementId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(|name| Self::intern(&name))
    }
}
