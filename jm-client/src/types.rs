use serde::Deserialize;

/// A comic-archive metadata record: one album with its title and tags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Album {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Result of a search. When the query resolves to a single album (e.g. the
/// query was an album id), `album` is present; otherwise it is absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub album: Option<Album>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_page_with_album_deserializes() {
        let page: SearchPage = serde_json::from_str(
            r#"{"album":{"id":422866,"title":"某本子","tags":["tag1","tag2"]}}"#,
        )
        .unwrap();

        let album = page.album.unwrap();
        assert_eq!(album.id, 422866);
        assert_eq!(album.title, "某本子");
        assert_eq!(album.tags, vec!["tag1", "tag2"]);
    }

    #[test]
    fn search_page_without_album_deserializes() {
        let page: SearchPage = serde_json::from_str("{}").unwrap();
        assert!(page.album.is_none());
    }

    #[test]
    fn album_tags_default_to_empty() {
        let album: Album =
            serde_json::from_str(r#"{"id":1,"title":"untagged"}"#).unwrap();
        assert!(album.tags.is_empty());
    }
}
