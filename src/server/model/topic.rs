//! Topic domain model and the parameters of topic operations.
//!
//! A topic embeds an ordered array of elements. Elements are addressed by their `id`,
//! which is unique within the topic; the array order is the display order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::topic::{
        CreateElementDto, CreateTopicDto, ElementPatchDto, TopicDto, TopicElementDto,
        TopicElementsDto, UpdateTopicDto,
    },
    server::{
        error::AppError,
        model::{document::Document, require_non_blank},
        util::ordered::{first_duplicate, Keyed, Patch},
    },
};

/// Minimum number of elements a new topic must carry.
pub const MIN_ELEMENTS: usize = 2;

/// An element as stored inside a topic's `elements` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicElement {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub pic: String,
}

impl Keyed for TopicElement {
    const KIND: &'static str = "Element";

    fn key(&self) -> &str {
        &self.id
    }
}

impl TopicElement {
    pub fn into_dto(self) -> TopicElementDto {
        TopicElementDto {
            id: self.id,
            text: self.text,
            pic: self.pic,
        }
    }
}

/// Stored body of a topic document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TopicBody {
    #[serde(default)]
    theme: String,
    #[serde(default)]
    elements: Vec<TopicElement>,
    #[serde(default)]
    total_elements: Option<usize>,
}

/// A topic with its embedded elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    pub id: String,
    pub theme: String,
    pub elements: Vec<TopicElement>,
    /// Element count written by the last element removal, if any.
    pub total_elements: Option<usize>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Topic {
    /// Reads a topic out of a stored document.
    ///
    /// Missing `theme` or `elements` fields read as empty.
    ///
    /// # Arguments
    /// - `document`: The stored document
    ///
    /// # Returns
    /// - `Ok(Topic)`: The parsed topic
    /// - `Err(serde_json::Error)`: The body does not have the topic shape
    pub fn from_document(document: Document) -> Result<Self, serde_json::Error> {
        let body: TopicBody = document.parse()?;

        Ok(Self {
            id: document.id,
            theme: body.theme,
            elements: body.elements,
            total_elements: body.total_elements,
            created_at: document.created_at,
            updated_at: document.updated_at,
        })
    }

    pub fn into_dto(self) -> TopicDto {
        TopicDto {
            id: self.id,
            theme: self.theme,
            elements: self.elements.into_iter().map(TopicElement::into_dto).collect(),
            total_elements: self.total_elements,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts the topic into the `{topicId, topicTheme, elements}` listing.
    pub fn into_elements_dto(self) -> TopicElementsDto {
        TopicElementsDto {
            topic_id: self.id,
            topic_theme: self.theme,
            elements: self.elements.into_iter().map(TopicElement::into_dto).collect(),
        }
    }
}

/// Content of an element that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewElementParams {
    pub text: String,
    pub pic: String,
}

impl NewElementParams {
    pub fn from_dto(dto: CreateElementDto) -> Self {
        Self {
            text: dto.text.unwrap_or_default(),
            pic: dto.pic.unwrap_or_default(),
        }
    }

    /// Assigns `id` and produces the stored element.
    pub fn into_element(self, id: String) -> TopicElement {
        TopicElement {
            id,
            text: self.text,
            pic: self.pic,
        }
    }
}

/// Parameters for creating a topic.
#[derive(Debug, Clone)]
pub struct CreateTopicParams {
    pub theme: String,
    pub elements: Vec<NewElementParams>,
}

impl CreateTopicParams {
    /// Validates a creation request.
    ///
    /// # Returns
    /// - `Ok(CreateTopicParams)`: Valid request
    /// - `Err(AppError::BadRequest)`: Blank theme or fewer than two elements
    pub fn from_dto(dto: CreateTopicDto) -> Result<Self, AppError> {
        require_non_blank("theme", &dto.theme)?;

        if dto.elements.len() < MIN_ELEMENTS {
            return Err(AppError::BadRequest(format!(
                "elements must contain at least {} elements",
                MIN_ELEMENTS
            )));
        }

        Ok(Self {
            theme: dto.theme,
            elements: dto
                .elements
                .into_iter()
                .map(NewElementParams::from_dto)
                .collect(),
        })
    }
}

/// An element inside a whole-array replacement. `id` is generated when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDraft {
    pub id: Option<String>,
    pub text: String,
    pub pic: String,
}

/// Parameters for updating a topic. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateTopicParams {
    pub theme: Option<String>,
    /// Replacement for the whole elements array.
    pub elements: Option<Vec<ElementDraft>>,
}

impl UpdateTopicParams {
    /// Validates an update request.
    ///
    /// # Returns
    /// - `Ok(UpdateTopicParams)`: Valid request
    /// - `Err(AppError::BadRequest)`: Blank theme, or an element id used more than once
    pub fn from_dto(dto: UpdateTopicDto) -> Result<Self, AppError> {
        if let Some(theme) = &dto.theme {
            require_non_blank("theme", theme)?;
        }

        let elements = dto.elements.map(|elements| {
            elements
                .into_iter()
                .map(|element| ElementDraft {
                    id: element.id.filter(|id| !id.trim().is_empty()),
                    text: element.text.unwrap_or_default(),
                    pic: element.pic.unwrap_or_default(),
                })
                .collect::<Vec<_>>()
        });

        if let Some(elements) = &elements {
            let ids = elements.iter().filter_map(|element| element.id.as_deref());
            if let Some(id) = first_duplicate(ids) {
                return Err(AppError::BadRequest(format!(
                    "Element ID {} appears more than once",
                    id
                )));
            }
        }

        Ok(Self {
            theme: dto.theme,
            elements,
        })
    }
}

/// Typed partial update of a single element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub text: Option<String>,
    pub pic: Option<String>,
}

impl ElementPatch {
    pub fn from_dto(dto: ElementPatchDto) -> Self {
        Self {
            text: dto.text,
            pic: dto.pic,
        }
    }
}

impl Patch<TopicElement> for ElementPatch {
    fn apply(self, target: &mut TopicElement) {
        if let Some(text) = self.text {
            target.text = text;
        }
        if let Some(pic) = self.pic {
            target.pic = pic;
        }
    }
}
