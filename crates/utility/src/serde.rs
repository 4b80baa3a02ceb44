pub mod duration {
    //! Field adapter for opening/closing times: minutes since midnight
    //! in memory, the restricted `PT<H>H<M>M` encoding on the wire.

    use schemars::gen::SchemaGenerator;
    use schemars::schema::{InstanceType, Schema, SchemaObject};
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::duration::{encode_duration, parse_duration};

    pub fn serialize<S>(minutes: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode_duration(*minutes))
    }

    /// Unparsable encodings deserialize to 0 rather than failing the
    /// whole record; the feed contract treats 0 as the fallback value.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(parse_duration(&s))
    }

    pub fn schema(_gen: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            format: Some("PT<H>H<M>M".to_owned()),
            ..Default::default()
        }
        .into()
    }
}
