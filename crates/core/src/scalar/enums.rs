use std::{fmt, marker::PhantomData};

use crate::codec::{AttributeCodec, CodecError, Result};

/// A closed set of named variants.
///
/// The name is the stored form, so it must never change once written.
pub trait NamedEnum: Sized + Copy + 'static {
    /// Type name used in error messages.
    const TYPE_NAME: &'static str;
    /// Every declared variant.
    const VARIANTS: &'static [Self];

    /// The declared name of this variant.
    fn name(&self) -> &'static str;

    /// Exact, case-sensitive lookup by declared name.
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.name() == name)
    }
}

/// Enum ⇄ declared variant name.
pub struct EnumCodec<E> {
    _enum: PhantomData<fn() -> E>,
}

impl<E> EnumCodec<E> {
    pub fn new() -> Self {
        Self {
            _enum: PhantomData,
        }
    }
}

impl<E> Default for EnumCodec<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EnumCodec<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EnumCodec<E> {}

impl<E: NamedEnum> fmt::Debug for EnumCodec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumCodec")
            .field("enum", &E::TYPE_NAME)
            .finish()
    }
}

impl<E: NamedEnum> AttributeCodec for EnumCodec<E> {
    type Value = E;
    type Stored = String;

    fn convert(&self, value: Option<&E>) -> Result<Option<String>> {
        Ok(value.map(|v| v.name().to_string()))
    }

    fn unconvert(&self, stored: Option<&String>) -> Result<Option<E>> {
        stored
            .map(|name| {
                E::from_name(name).ok_or_else(|| {
                    tracing::debug!(enum_type = E::TYPE_NAME, %name, "Rejected unknown variant");
                    CodecError::UnknownVariant {
                        type_name: E::TYPE_NAME,
                        name: name.clone(),
                    }
                })
            })
            .transpose()
    }
}
