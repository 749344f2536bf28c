//! Topic factory for inserting topic documents with embedded elements.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::helpers::{insert_document, next_short_id};
use crate::fixture::document::{element, topic_data, DEFAULT_THEME, TOPICS};

/// Factory for creating topic documents.
///
/// Elements added without an explicit id receive `elem_<topicId>_<index>`, the same
/// shape the topic service assigns on creation.
///
/// # Example
///
/// ```rust,ignore
/// let topic = TopicFactory::new(&db)
///     .theme("Elections")
///     .element("A")
///     .element("B")
///     .build()
///     .await?;
/// ```
pub struct TopicFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    theme: String,
    elements: Vec<(Option<String>, String, String)>,
}

impl<'a> TopicFactory<'a> {
    /// Creates a factory with a unique id, the default theme and no elements.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: next_short_id(),
            theme: DEFAULT_THEME.to_string(),
            elements: Vec::new(),
        }
    }

    /// Overrides the generated document id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the topic theme.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Appends an element whose id is derived from its position.
    pub fn element(mut self, text: impl Into<String>) -> Self {
        self.elements.push((None, text.into(), String::new()));
        self
    }

    /// Appends an element with an explicit id and picture.
    pub fn element_with_id(
        mut self,
        id: impl Into<String>,
        text: impl Into<String>,
        pic: impl Into<String>,
    ) -> Self {
        self.elements.push((Some(id.into()), text.into(), pic.into()));
        self
    }

    /// Builds and inserts the topic document.
    ///
    /// # Returns
    /// - `Ok(entity::document::Model)` - Created document row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        let elements = self
            .elements
            .iter()
            .enumerate()
            .map(|(index, (id, text, pic))| {
                let id = id
                    .clone()
                    .unwrap_or_else(|| format!("elem_{}_{}", self.id, index));
                element(&id, text, pic)
            })
            .collect();

        insert_document(self.db, TOPICS, &self.id, topic_data(&self.theme, elements)).await
    }
}

/// Creates a topic with the default theme and two elements, `"A"` and `"B"`.
pub async fn create_topic(db: &DatabaseConnection) -> Result<entity::document::Model, DbErr> {
    TopicFactory::new(db).element("A").element("B").build().await
}
