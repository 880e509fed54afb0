//! Domain value types stored through the codecs, and the concrete codecs
//! for them.

mod demographic;
mod event;
mod export;
mod study;

pub use demographic::{
    attach_demographic_user, Demographic, DemographicUserRef, DemographicValue, StoredDemographic,
};
pub use event::ActivityEventUpdateType;
pub use export::ExportedRecordInfo;
pub use study::StudyPhase;

use crate::keyed::KeyedMapCodec;
use crate::scalar::EnumCodec;

/// Demographic category → demographic entry.
pub type DemographicMapCodec = KeyedMapCodec<Demographic>;

/// Custom event name → update policy.
pub type EventUpdateTypeMapCodec = KeyedMapCodec<ActivityEventUpdateType>;

/// Study id → export record.
pub type ExportedRecordMapCodec = KeyedMapCodec<ExportedRecordInfo>;

pub type StudyPhaseCodec = EnumCodec<StudyPhase>;
