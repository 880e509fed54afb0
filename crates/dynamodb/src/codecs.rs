use std::sync::Arc;

use dynamarshal_core::domain::{
    DemographicMapCodec, EventUpdateTypeMapCodec, ExportedRecordMapCodec, StudyPhaseCodec,
};
use dynamarshal_core::{
    DateTimeCodec, EpochMillisCodec, JsonMapper, JsonNodeCodec, LocalDateCodec,
    LocalDateTimeCodec, MapperConfig, StringListCodec, StringSetCodec,
};

/// Every codec the item conversions need, built once and shared.
#[derive(Debug, Clone)]
pub struct AttributeCodecs {
    pub timestamp: DateTimeCodec,
    pub epoch_millis: EpochMillisCodec,
    pub local_date: LocalDateCodec,
    pub local_date_time: LocalDateTimeCodec,
    pub study_phase: StudyPhaseCodec,
    pub string_set: StringSetCodec,
    pub string_list: StringListCodec,
    pub client_data: JsonNodeCodec,
    pub demographics: DemographicMapCodec,
    pub event_update_types: EventUpdateTypeMapCodec,
    pub exported_records: ExportedRecordMapCodec,
}

impl AttributeCodecs {
    /// Builds the codec set around one shared mapper.
    pub fn new(mapper: Arc<JsonMapper>) -> Self {
        Self {
            timestamp: DateTimeCodec,
            epoch_millis: EpochMillisCodec,
            local_date: LocalDateCodec,
            local_date_time: LocalDateTimeCodec,
            study_phase: StudyPhaseCodec::new(),
            string_set: StringSetCodec::new(Arc::clone(&mapper)),
            string_list: StringListCodec::new(Arc::clone(&mapper)),
            client_data: JsonNodeCodec::new(Arc::clone(&mapper)),
            demographics: DemographicMapCodec::new(Arc::clone(&mapper)),
            event_update_types: EventUpdateTypeMapCodec::new(Arc::clone(&mapper)),
            exported_records: ExportedRecordMapCodec::new(mapper),
        }
    }

    /// Builds the codec set from a mapper configuration.
    pub fn from_config(config: MapperConfig) -> Self {
        Self::new(Arc::new(JsonMapper::new(config)))
    }
}

impl Default for AttributeCodecs {
    fn default() -> Self {
        Self::new(Arc::new(JsonMapper::default()))
    }
}
