//! Matching candidate faces against enrolled descriptors

use std::sync::Arc;
use tracing::debug;

use crate::domain::{FaceDescriptor, FaceMatch, ImageFrame, LabeledDescriptors};
use crate::error::DomainError;
use crate::ports::FaceDescriptorProvider;
use hris_shared::constants::FACE_MATCH_THRESHOLD;

/// Nearest-label matcher. A label's distance is the mean distance to all of
/// its descriptors; anything farther than the threshold is unknown.
#[derive(Debug, Clone)]
pub struct FaceMatcher {
    labeled: Vec<LabeledDescriptors>,
    threshold: f32,
}

impl FaceMatcher {
    pub fn new(labeled: Vec<LabeledDescriptors>) -> Self {
        Self::with_threshold(labeled, FACE_MATCH_THRESHOLD)
    }

    pub fn with_threshold(labeled: Vec<LabeledDescriptors>, threshold: f32) -> Self {
        let labeled = labeled
            .into_iter()
            .filter(|entry| !entry.descriptors.is_empty())
            .collect();
        Self { labeled, threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_empty(&self) -> bool {
        self.labeled.is_empty()
    }

    pub fn best_match(&self, candidate: &FaceDescriptor) -> FaceMatch {
        let best = self
            .labeled
            .iter()
            .map(|entry| {
                let total: f32 = entry
                    .descriptors
                    .iter()
                    .map(|d| d.euclidean_distance(candidate))
                    .sum();
                (entry, total / entry.descriptors.len() as f32)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1));

        match best {
            Some((entry, distance)) if distance <= self.threshold => FaceMatch {
                label: Some(entry.label.clone()),
                distance,
            },
            Some((_, distance)) => FaceMatch {
                label: None,
                distance,
            },
            None => FaceMatch {
                label: None,
                distance: f32::INFINITY,
            },
        }
    }
}

/// Runs the face model and the matcher together.
pub struct FaceRecognizer<P: FaceDescriptorProvider> {
    provider: Arc<P>,
    matcher: FaceMatcher,
}

impl<P: FaceDescriptorProvider> FaceRecognizer<P> {
    pub fn new(provider: Arc<P>, matcher: FaceMatcher) -> Self {
        Self { provider, matcher }
    }

    pub fn replace_matcher(&mut self, matcher: FaceMatcher) {
        self.matcher = matcher;
    }

    /// Descriptor for enrollment, `None` when no face is in the frame.
    pub async fn descriptor(&self, frame: &ImageFrame) -> Result<Option<FaceDescriptor>, DomainError> {
        self.provider.single_face(frame).await
    }

    /// Match the single most prominent face. `Ok(None)` means no face was found.
    pub async fn identify(&self, frame: &ImageFrame) -> Result<Option<FaceMatch>, DomainError> {
        let Some(candidate) = self.provider.single_face(frame).await? else {
            debug!("No face detected in frame");
            return Ok(None);
        };
        Ok(Some(self.matcher.best_match(&candidate)))
    }

    pub async fn identify_all(&self, frame: &ImageFrame) -> Result<Vec<FaceMatch>, DomainError> {
        let faces = self.provider.all_faces(frame).await?;
        Ok(faces.iter().map(|face| self.matcher.best_match(face)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::face::descriptor_filled;
    use crate::ports::MockFaceDescriptorProvider;

    fn matcher() -> FaceMatcher {
        FaceMatcher::new(vec![
            LabeledDescriptors::new("alice", vec![descriptor_filled(0.0), descriptor_filled(0.02)]),
            LabeledDescriptors::new("bob", vec![descriptor_filled(0.5)]),
            LabeledDescriptors::new("empty", Vec::new()),
        ])
    }

    fn frame() -> ImageFrame {
        ImageFrame::new(1, 1, vec![0; 4]).unwrap()
    }

    #[test]
    fn test_closest_label_within_threshold() {
        let result = matcher().best_match(&descriptor_filled(0.01));
        assert_eq!(result.label.as_deref(), Some("alice"));
        assert!(result.distance < FACE_MATCH_THRESHOLD);
    }

    #[test]
    fn test_distant_face_is_unknown() {
        let result = matcher().best_match(&descriptor_filled(2.0));
        assert!(!result.is_known());
        assert!(result.distance > FACE_MATCH_THRESHOLD);
    }

    #[test]
    fn test_empty_matcher_is_unknown() {
        let matcher = FaceMatcher::new(Vec::new());
        assert!(matcher.is_empty());
        assert_eq!(matcher.best_match(&descriptor_filled(0.0)).label, None);
    }

    #[tokio::test]
    async fn test_identify_without_face_returns_none() {
        let mut provider = MockFaceDescriptorProvider::new();
        provider.expect_single_face().returning(|_| Ok(None));

        let recognizer = FaceRecognizer::new(Arc::new(provider), matcher());
        assert_eq!(recognizer.identify(&frame()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_identify_matches_detected_face() {
        let mut provider = MockFaceDescriptorProvider::new();
        provider
            .expect_single_face()
            .returning(|_| Ok(Some(descriptor_filled(0.5))));

        let recognizer = FaceRecognizer::new(Arc::new(provider), matcher());
        let result = recognizer.identify(&frame()).await.unwrap().unwrap();
        assert_eq!(result.label.as_deref(), Some("bob"));
    }

    #[tokio::test]
    async fn test_identify_all_matches_each_face() {
        let mut provider = MockFaceDescriptorProvider::new();
        provider
            .expect_all_faces()
            .returning(|_| Ok(vec![descriptor_filled(0.0), descriptor_filled(3.0)]));

        let recognizer = FaceRecognizer::new(Arc::new(provider), matcher());
        let results = recognizer.identify_all(&frame()).await.unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_known());
        assert!(!results[1].is_known());
    }
}
