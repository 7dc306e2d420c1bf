use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// PostgREST returns unset columns as `null` rather than omitting them.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Row sent when creating a community. Field values are sent as typed,
/// surrounding whitespace included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CommunityInput {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn community_input_serializes_only_name_and_description() {
        let input = CommunityInput {
            name: "React Devs".into(),
            description: "A space for React.".into(),
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"name": "React Devs", "description": "A space for React."})
        );
    }

    #[test]
    fn post_tolerates_missing_optional_columns() {
        let post: Post = serde_json::from_value(json!({
            "id": 7,
            "title": "Hello",
            "created_at": "2025-01-02T03:04:05+00:00",
            "image_url": null
        }))
        .unwrap();
        assert_eq!(post.likes, 0);
        assert_eq!(post.content, "");
        assert_eq!(post.image_url, None);
        assert_eq!(post.avatar_url, None);
    }

    #[test]
    fn null_columns_decode_as_blank_values() {
        let post: Post = serde_json::from_value(json!({
            "id": 1,
            "title": null,
            "content": null,
            "image_url": null,
            "created_at": "2025-01-02T03:04:05+00:00",
            "avatar_url": null,
            "likes": null
        }))
        .unwrap();
        assert_eq!(post.title, "");
        assert_eq!(post.content, "");
        assert_eq!(post.likes, 0);

        let community: Community = serde_json::from_value(json!({
            "id": null,
            "name": "a",
            "description": null,
            "created_at": null
        }))
        .unwrap();
        assert_eq!(community.name, "a");
        assert_eq!(community.description, "");
    }
}
