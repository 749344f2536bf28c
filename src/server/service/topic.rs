use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::server::{
    data::document::DocumentRepository,
    error::{collection::CollectionError, AppError, StoreContext},
    model::{
        document::{DeletedDocument, Document},
        topic::{
            CreateTopicParams, ElementPatch, NewElementParams, Topic, TopicElement,
            UpdateTopicParams,
        },
        PageParams, ReorderParams,
    },
    service::{field_patch, malformed, to_json},
    util::{
        id::{child_id, fresh_child_id, indexed_timestamp_id, short_id},
        ordered::{self, Keyed},
    },
};

/// Collection holding topic documents.
pub const TOPICS: &str = "topics";

/// Topic operations, including edits of the embedded elements array.
///
/// Every element edit fetches the topic, computes the new array with the ordered
/// collection editor and writes the whole array back.
pub struct TopicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a topic under a new short id.
    ///
    /// Elements receive keys `elem_<topicId>_<index>` in the order given.
    ///
    /// # Arguments
    /// - `params` - Validated theme and elements
    ///
    /// # Returns
    /// - `Ok(Topic)` - The stored topic
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn create(&self, params: CreateTopicParams) -> Result<Topic, AppError> {
        let repo = DocumentRepository::new(self.db);

        let topic_id = short_id();
        let elements: Vec<TopicElement> = params
            .elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| element.into_element(child_id(&topic_id, index)))
            .collect();

        let mut data = Map::new();
        data.insert("theme".to_string(), Value::String(params.theme));
        data.insert("elements".to_string(), to_json(&elements)?);

        let document = repo
            .create_with_id(TOPICS, &topic_id, Value::Object(data))
            .await
            .context("Failed to create topic")?;

        tracing::info!(
            "Created topic {} with {} elements",
            topic_id,
            elements.len()
        );

        read_topic(document)
    }

    /// Lists topics in id order.
    pub async fn find_all(&self, page: PageParams) -> Result<Vec<Topic>, AppError> {
        let repo = DocumentRepository::new(self.db);

        let documents = repo
            .find_all(TOPICS, &[], page.limit, page.start_after.as_deref())
            .await
            .context("Failed to fetch topics")?;

        documents.into_iter().map(read_topic).collect()
    }

    /// Gets a topic by id.
    ///
    /// # Returns
    /// - `Ok(Topic)` - The topic
    /// - `Err(AppError::NotFound)` - No topic with that id
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn find_one(&self, id: &str) -> Result<Topic, AppError> {
        let repo = DocumentRepository::new(self.db);

        let document = repo
            .find_one(TOPICS, id)
            .await
            .context("Failed to fetch topic")?
            .ok_or_else(|| not_found(id))?;

        read_topic(document)
    }

    /// Updates a topic's theme and/or replaces its whole elements array.
    ///
    /// Elements without an id receive `elem_<millis>_<index>`.
    ///
    /// # Returns
    /// - `Ok(Topic)` - The updated topic
    /// - `Err(AppError::NotFound)` - No topic with that id
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn update(&self, id: &str, params: UpdateTopicParams) -> Result<Topic, AppError> {
        let mut patch = Map::new();

        if let Some(theme) = params.theme {
            patch.insert("theme".to_string(), Value::String(theme));
        }

        if let Some(drafts) = params.elements {
            let elements: Vec<TopicElement> = drafts
                .into_iter()
                .enumerate()
                .map(|(index, draft)| TopicElement {
                    id: draft.id.unwrap_or_else(|| indexed_timestamp_id(index)),
                    text: draft.text,
                    pic: draft.pic,
                })
                .collect();
            patch.insert("elements".to_string(), to_json(&elements)?);
        }

        let topic = self.write(id, patch, "Failed to update topic").await?;

        tracing::debug!("Updated topic {}", id);

        Ok(topic)
    }

    /// Deletes a topic together with its elements.
    ///
    /// # Returns
    /// - `Ok(DeletedDocument)` - `{id, deleted: true}`
    /// - `Err(AppError::NotFound)` - No topic with that id
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn remove(&self, id: &str) -> Result<DeletedDocument, AppError> {
        let repo = DocumentRepository::new(self.db);

        let deleted = repo
            .remove(TOPICS, id)
            .await
            .context("Failed to delete topic")?
            .ok_or_else(|| not_found(id))?;

        tracing::info!("Deleted topic {}", id);

        Ok(deleted)
    }

    /// Appends an element under a fresh key.
    ///
    /// # Returns
    /// - `Ok(TopicElement)` - The appended element
    /// - `Err(AppError::NotFound)` - No topic with that id
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn add_element(
        &self,
        topic_id: &str,
        params: NewElementParams,
    ) -> Result<TopicElement, AppError> {
        let topic = self.find_one(topic_id).await?;

        let key = fresh_child_id(topic.elements.iter().map(TopicElement::key));
        let element = params.into_element(key);
        let elements = ordered::append(&topic.elements, element.clone());

        self.write(
            topic_id,
            field_patch("elements", &elements)?,
            "Failed to add element",
        )
        .await?;

        tracing::debug!("Added element {} to topic {}", element.id, topic_id);

        Ok(element)
    }

    /// Merges a patch onto one element.
    ///
    /// # Returns
    /// - `Ok(TopicElement)` - The element after the patch
    /// - `Err(AppError::NotFound)` - No topic with that id
    /// - `Err(AppError::CollectionErr)` - No element with that id; nothing is written
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn update_element(
        &self,
        topic_id: &str,
        element_id: &str,
        patch: ElementPatch,
    ) -> Result<TopicElement, AppError> {
        let topic = self.find_one(topic_id).await?;

        let elements = ordered::update_at(&topic.elements, element_id, patch)?;
        let element = ordered::find(&elements, element_id)
            .cloned()
            .ok_or_else(|| CollectionError::not_found::<TopicElement>(element_id))?;

        self.write(
            topic_id,
            field_patch("elements", &elements)?,
            "Failed to update element",
        )
        .await?;

        tracing::debug!("Updated element {} of topic {}", element_id, topic_id);

        Ok(element)
    }

    /// Removes one element and records the remaining count in `totalElements`.
    ///
    /// Remaining elements keep their ids and relative order.
    ///
    /// # Returns
    /// - `Ok(Topic)` - The topic after the removal
    /// - `Err(AppError::NotFound)` - No topic with that id
    /// - `Err(AppError::CollectionErr)` - No element with that id
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn remove_element(&self, topic_id: &str, element_id: &str) -> Result<Topic, AppError> {
        let topic = self.find_one(topic_id).await?;

        let elements = ordered::remove_at(&topic.elements, element_id)?;

        let mut patch = field_patch("elements", &elements)?;
        patch.insert("totalElements".to_string(), Value::from(elements.len()));

        let topic = self
            .write(topic_id, patch, "Failed to remove element")
            .await?;

        tracing::debug!("Removed element {} from topic {}", element_id, topic_id);

        Ok(topic)
    }

    /// Rearranges the elements into the order of `params.keys`.
    ///
    /// # Returns
    /// - `Ok(Vec<TopicElement>)` - The elements in their new order
    /// - `Err(AppError::NotFound)` - No topic with that id
    /// - `Err(AppError::CollectionErr)` - The keys are not a permutation of the element ids;
    ///   nothing is written
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn reorder_elements(
        &self,
        topic_id: &str,
        params: ReorderParams,
    ) -> Result<Vec<TopicElement>, AppError> {
        let topic = self.find_one(topic_id).await?;

        let elements = ordered::reorder(&topic.elements, &params.keys)?;

        self.write(
            topic_id,
            field_patch("elements", &elements)?,
            "Failed to reorder elements",
        )
        .await?;

        tracing::debug!("Reordered {} elements of topic {}", elements.len(), topic_id);

        Ok(elements)
    }

    /// Gets one element of a topic.
    ///
    /// # Returns
    /// - `Ok(TopicElement)` - The element
    /// - `Err(AppError::NotFound)` - No topic with that id
    /// - `Err(AppError::CollectionErr)` - No element with that id
    pub async fn get_element(
        &self,
        topic_id: &str,
        element_id: &str,
    ) -> Result<TopicElement, AppError> {
        let topic = self.find_one(topic_id).await?;

        ordered::find(&topic.elements, element_id)
            .cloned()
            .ok_or_else(|| CollectionError::not_found::<TopicElement>(element_id).into())
    }

    /// Gets a topic for the `{topicId, topicTheme, elements}` listing.
    pub async fn get_elements(&self, topic_id: &str) -> Result<Topic, AppError> {
        self.find_one(topic_id).await
    }

    async fn write(
        &self,
        id: &str,
        patch: Map<String, Value>,
        context: &str,
    ) -> Result<Topic, AppError> {
        let repo = DocumentRepository::new(self.db);

        let document = repo
            .update(TOPICS, id, patch)
            .await
            .context(context)?
            .ok_or_else(|| not_found(id))?;

        read_topic(document)
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Topic with ID {} not found", id))
}

fn read_topic(document: Document) -> Result<Topic, AppError> {
    let id = document.id.clone();
    Topic::from_document(document).map_err(|e| malformed("topic", &id, e))
}
