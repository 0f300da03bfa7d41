use mongodb::bson::oid::ObjectId;

use crate::error::ApiError;

pub fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::InvalidId(raw.to_string()))
}

pub fn parse_author_ids(raw: &[String]) -> Result<Vec<ObjectId>, ApiError> {
    raw.iter().map(|id| parse_object_id(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_valid_hex_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(ApiError::InvalidId(_))
        ));
        assert!(matches!(parse_object_id(""), Err(ApiError::InvalidId(_))));
    }

    #[test]
    fn one_bad_id_fails_the_whole_list() {
        let raw = vec![ObjectId::new().to_hex(), "nonsense".to_string()];
        assert!(parse_author_ids(&raw).is_err());
    }
}
