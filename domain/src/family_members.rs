//! Data transfer objects published by the upstream family members API.
//!
//! The relay never builds or rewrites these; successful bodies are passed through as raw
//! bytes. The types describe the upstream contract in the OpenAPI docs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The upstream's uniform response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    pub success: bool,
    pub status: u16,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub errors: serde_json::Value,
}

/// One page of results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub page_number: u32,
    pub page_size: u32,
    pub total_records: u64,
    pub data: Vec<T>,
}

/// Summary of a family member as returned by the list and search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: i64,
    pub title: String,
    pub full_name: String,
    #[serde(default)]
    pub mobile: Option<String>,
    /// Birth date, formatted by the upstream.
    #[serde(default)]
    pub bod: Option<String>,
    pub gender: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    pub is_still_live: bool,
    #[serde(default)]
    pub mother_name: Option<String>,
    #[serde(default)]
    pub wife_name: Option<String>,
    pub photo_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub related_full_name: String,
    pub relation_type: String,
}

/// A link in an ancestor chain. Its own `parent` is left as open JSON because the
/// upstream nests it to an unknown depth and does not document its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AncestorSummary {
    pub id: i64,
    pub title: String,
    pub full_name: String,
    #[serde(default)]
    pub photo: Option<String>,
    pub is_still_live: bool,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub parent: serde_json::Value,
}

/// Full record returned by the details endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberDetails {
    pub id: i64,
    pub title: String,
    pub full_name: String,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub bod: Option<String>,
    pub is_still_live: bool,
    pub gender: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    pub photo_url: String,
    #[serde(default)]
    pub relations: Vec<Relation>,
    #[serde(default)]
    pub parent: Option<AncestorSummary>,
    #[serde(default)]
    pub childs: Vec<Relation>,
}

/// Ancestor chains of two members up to the ancestor they share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchBetweenResult {
    pub member1: Vec<AncestorSummary>,
    pub member2: Vec<AncestorSummary>,
    pub common_ancestor: AncestorSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paged_members_envelope_deserializes() {
        let body = json!({
            "success": true,
            "status": 200,
            "message": "OK",
            "data": {
                "pageNumber": 1,
                "pageSize": 10,
                "totalRecords": 1,
                "data": [{
                    "id": 12,
                    "title": "Sheikh",
                    "fullName": "Abdullah Saleh Al Qwassem",
                    "mobile": null,
                    "bod": "1950-01-01",
                    "gender": "Male",
                    "jobTitle": null,
                    "branch": "North",
                    "education": null,
                    "isStillLive": false,
                    "motherName": "Noura",
                    "wifeName": null,
                    "photoUrl": "/photos/12.jpg"
                }]
            },
            "errors": null
        });

        let envelope: Envelope<PagedResult<FamilyMember>> = serde_json::from_value(body).unwrap();
        let page = envelope.data.unwrap();
        assert_eq!(page.total_records, 1);
        assert_eq!(page.data[0].full_name, "Abdullah Saleh Al Qwassem");
        assert_eq!(page.data[0].mother_name.as_deref(), Some("Noura"));
        assert!(!page.data[0].is_still_live);
    }

    #[test]
    fn test_details_keeps_nested_parent_open() {
        let body = json!({
            "id": 40,
            "title": "",
            "fullName": "Saleh Abdullah",
            "mobile": "0500000000",
            "bod": null,
            "isStillLive": true,
            "gender": "Male",
            "bio": null,
            "jobTitle": "Engineer",
            "branch": null,
            "education": "BSc",
            "photoUrl": "/photos/40.jpg",
            "relations": [{ "relatedFullName": "Abdullah Saleh", "relationType": "Father" }],
            "parent": {
                "id": 12,
                "title": "Sheikh",
                "fullName": "Abdullah Saleh",
                "photo": "/photos/12.jpg",
                "isStillLive": false,
                "parent": { "id": 3, "fullName": "Saleh", "parent": null }
            },
            "childs": []
        });

        let details: FamilyMemberDetails = serde_json::from_value(body).unwrap();
        let parent = details.parent.unwrap();
        assert_eq!(parent.id, 12);
        assert_eq!(parent.parent["fullName"], "Saleh");
        assert_eq!(details.relations[0].relation_type, "Father");
        assert!(details.childs.is_empty());
    }

    #[test]
    fn test_search_between_deserializes() {
        let ancestor = json!({
            "id": 1,
            "title": "",
            "fullName": "Qwassem",
            "photo": "",
            "isStillLive": false,
            "parent": null
        });
        let body = json!({
            "member1": [ancestor.clone()],
            "member2": [],
            "commonAncestor": ancestor
        });

        let result: SearchBetweenResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.member1.len(), 1);
        assert!(result.member2.is_empty());
        assert_eq!(result.common_ancestor.full_name, "Qwassem");
        assert!(result.common_ancestor.parent.is_null());
    }
}
