//! Face model port
//!
//! The detection model is an external capability: given a frame it returns
//! one descriptor per detected face.

use async_trait::async_trait;

use crate::domain::{FaceDescriptor, ImageFrame};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FaceDescriptorProvider: Send + Sync {
    /// Descriptor of the single most prominent face, `None` when no face is found.
    async fn single_face(&self, frame: &ImageFrame) -> Result<Option<FaceDescriptor>, DomainError>;

    async fn all_faces(&self, frame: &ImageFrame) -> Result<Vec<FaceDescriptor>, DomainError>;
}
