//! Codec traits between typed values and their stored representation.
//!
//! Which types are storable is an explicit, finite registry: the
//! implementations of [`ValueCodec`] in this module, plus whatever consumers
//! add for their own types. There is no marker-only or reflective mechanism.

use super::stored::Stored;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Deref;
use uuid::Uuid;

/// Conversion between a typed value and its [`Stored`] representation.
///
/// Implement this for custom types to make them persistable, e.g. a closed
/// enum that encodes as its case name:
///
/// ```
/// use cellkit::{Stored, ValueCodec};
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum ColorScheme { Light, Dark }
///
/// impl ValueCodec for ColorScheme {
///     fn encode(&self) -> Option<Stored> {
///         let name = match self {
///             ColorScheme::Light => "light",
///             ColorScheme::Dark => "dark",
///         };
///         Some(Stored::String(name.to_string()))
///     }
///
///     fn decode(stored: &Stored) -> Option<Self> {
///         match stored.as_str()? {
///             "light" => Some(ColorScheme::Light),
///             "dark" => Some(ColorScheme::Dark),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait ValueCodec: Sized {
    /// True only for optional types. Lets
    /// [`PersistedSetting`](super::PersistedSetting) enforce that an optional
    /// setting's default is `None`.
    const IS_OPTIONAL: bool = false;

    /// Encode into the stored representation.
    ///
    /// `None` is the absent sentinel: an `Option` holding `None` produces
    /// it, as does a collection containing an absent element (which has no
    /// stored form). Non-optional scalar types always return `Some`.
    fn encode(&self) -> Option<Stored>;

    /// Decode from the stored representation. `None` means the stored shape
    /// did not match or the conversion failed; callers recover by falling
    /// back to their default.
    fn decode(stored: &Stored) -> Option<Self>;
}

/// Conversion between a typed map key and its stored string form.
pub trait KeyCodec: Sized {
    /// Encode this key as its storage string.
    fn encode_key(&self) -> String;

    /// Decode a key from its storage string. `None` on failure.
    fn decode_key(key: &str) -> Option<Self>;
}

// ============================================================================
// Scalars
// ============================================================================

impl ValueCodec for String {
    fn encode(&self) -> Option<Stored> {
        Some(Stored::String(self.clone()))
    }

    fn decode(stored: &Stored) -> Option<Self> {
        stored.as_str().map(str::to_owned)
    }
}

impl ValueCodec for bool {
    fn encode(&self) -> Option<Stored> {
        Some(Stored::Bool(*self))
    }

    fn decode(stored: &Stored) -> Option<Self> {
        stored.as_bool()
    }
}

macro_rules! signed_codec {
    ($($t:ty),* $(,)?) => {$(
        impl ValueCodec for $t {
            fn encode(&self) -> Option<Stored> {
                Some(Stored::Int(*self as i64))
            }

            fn decode(stored: &Stored) -> Option<Self> {
                // Either integer shape decodes, as long as the value fits.
                match *stored {
                    Stored::Int(i) => <$t>::try_from(i).ok(),
                    Stored::UInt(u) => <$t>::try_from(u).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

macro_rules! unsigned_codec {
    ($($t:ty),* $(,)?) => {$(
        impl ValueCodec for $t {
            fn encode(&self) -> Option<Stored> {
                Some(Stored::UInt(*self as u64))
            }

            fn decode(stored: &Stored) -> Option<Self> {
                match *stored {
                    Stored::Int(i) => <$t>::try_from(i).ok(),
                    Stored::UInt(u) => <$t>::try_from(u).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

signed_codec!(i8, i16, i32, i64, isize);
unsigned_codec!(u8, u16, u32, u64, usize);

impl ValueCodec for f64 {
    fn encode(&self) -> Option<Stored> {
        Some(Stored::Float(*self))
    }

    fn decode(stored: &Stored) -> Option<Self> {
        match *stored {
            Stored::Float(f) => Some(f),
            _ => None,
        }
    }
}

impl ValueCodec for f32 {
    fn encode(&self) -> Option<Stored> {
        Some(Stored::Float(f64::from(*self)))
    }

    fn decode(stored: &Stored) -> Option<Self> {
        match *stored {
            Stored::Float(f) => Some(f as f32),
            _ => None,
        }
    }
}

/// UUIDs store themselves as their hyphenated string form.
impl ValueCodec for Uuid {
    fn encode(&self) -> Option<Stored> {
        Some(Stored::String(self.to_string()))
    }

    fn decode(stored: &Stored) -> Option<Self> {
        Uuid::parse_str(stored.as_str()?).ok()
    }
}

impl ValueCodec for DateTime<Utc> {
    fn encode(&self) -> Option<Stored> {
        Some(Stored::Timestamp(*self))
    }

    fn decode(stored: &Stored) -> Option<Self> {
        stored.as_timestamp()
    }
}

/// An opaque byte blob, stored as [`Stored::Bytes`].
///
/// `Vec<u8>` encodes through the generic sequence codec as an `Array` of
/// integers; wrap the bytes in `Blob` to store them as a raw blob instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blob(pub Vec<u8>);

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Blob(bytes)
    }
}

impl Deref for Blob {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl ValueCodec for Blob {
    fn encode(&self) -> Option<Stored> {
        Some(Stored::Bytes(self.0.clone()))
    }

    fn decode(stored: &Stored) -> Option<Self> {
        stored.as_bytes().map(|b| Blob(b.to_vec()))
    }
}

// ============================================================================
// Composites
// ============================================================================

impl<T: ValueCodec> ValueCodec for Option<T> {
    const IS_OPTIONAL: bool = true;

    fn encode(&self) -> Option<Stored> {
        self.as_ref().and_then(T::encode)
    }

    fn decode(stored: &Stored) -> Option<Self> {
        // A failed inner decode propagates as failure; absence of a stored
        // entry never reaches this point (the caller falls back first).
        T::decode(stored).map(Some)
    }
}

impl<T: ValueCodec> ValueCodec for Vec<T> {
    fn encode(&self) -> Option<Stored> {
        // A sequence containing an absent element has no stored form.
        let elements: Option<Vec<Stored>> = self.iter().map(T::encode).collect();
        elements.map(Stored::Array)
    }

    fn decode(stored: &Stored) -> Option<Self> {
        // Atomic: one bad element fails the whole sequence. A partially
        // decoded collection is never returned.
        stored.as_array()?.iter().map(T::decode).collect()
    }
}

impl<K, V> ValueCodec for HashMap<K, V>
where
    K: KeyCodec + Eq + Hash,
    V: ValueCodec,
{
    fn encode(&self) -> Option<Stored> {
        let mut encoded = HashMap::with_capacity(self.len());
        for (key, value) in self {
            // Keys that convert to the same storage string collapse to one
            // entry, keeping the last value encountered.
            encoded.insert(key.encode_key(), value.encode()?);
        }
        Some(Stored::Map(encoded))
    }

    fn decode(stored: &Stored) -> Option<Self> {
        // Atomic: one bad key or value fails the whole map.
        let encoded = stored.as_map()?;
        let mut decoded = HashMap::with_capacity(encoded.len());
        for (key, value) in encoded {
            decoded.insert(K::decode_key(key)?, V::decode(value)?);
        }
        Some(decoded)
    }
}

// ============================================================================
// Keys
// ============================================================================

impl KeyCodec for String {
    fn encode_key(&self) -> String {
        self.clone()
    }

    fn decode_key(key: &str) -> Option<Self> {
        Some(key.to_owned())
    }
}

macro_rules! int_key_codec {
    ($($t:ty),* $(,)?) => {$(
        impl KeyCodec for $t {
            fn encode_key(&self) -> String {
                self.to_string()
            }

            fn decode_key(key: &str) -> Option<Self> {
                key.parse().ok()
            }
        }
    )*};
}

int_key_codec!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
