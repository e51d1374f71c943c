use bitflags::bitflags;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Content-editing surfaces a registered type supports.
    ///
    /// Names follow the host's vocabulary: `editor` is the body,
    /// `thumbnail` the featured image.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Surfaces: u8 {
        const TITLE = 1 << 0;
        const EDITOR = 1 << 1;
        const THUMBNAIL = 1 << 2;

        /// The fixed template every generated registration uses.
        const DEFAULT = Self::TITLE.bits() | Self::EDITOR.bits() | Self::THUMBNAIL.bits();
    }
}

const NAMES: [(Surfaces, &str); 3] =
    [(Surfaces::TITLE, "title"), (Surfaces::EDITOR, "editor"), (Surfaces::THUMBNAIL, "thumbnail")];

impl Surfaces {
    /// Host names of the enabled surfaces, in a stable order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        NAMES.into_iter().filter(move |(flag, _)| self.contains(*flag)).map(|(_, name)| name)
    }

    /// Looks up a single surface by its host name.
    #[must_use]
    pub fn from_host_name(name: &str) -> Option<Self> {
        NAMES.iter().find(|(_, n)| *n == name).map(|(flag, _)| *flag)
    }
}

impl Serialize for Surfaces {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.bits().count_ones() as usize))?;
        for name in self.names() {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Surfaces {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SurfacesVisitor;

        impl<'de> Visitor<'de> for SurfacesVisitor {
            type Value = Surfaces;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of surface names")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Surfaces, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut out = Surfaces::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    out |= Surfaces::from_host_name(&name).ok_or_else(|| {
                        de::Error::unknown_variant(&name, &["title", "editor", "thumbnail"])
                    })?;
                }
                Ok(out)
            }
        }

        deserializer.deserialize_seq(SurfacesVisitor)
    }
}
