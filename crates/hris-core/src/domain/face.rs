//! Face descriptors used for biometric check-in

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use hris_shared::constants::FACE_DESCRIPTOR_LEN;

/// Fixed-length embedding produced by the face model for one detected face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct FaceDescriptor(Vec<f32>);

impl TryFrom<Vec<f32>> for FaceDescriptor {
    type Error = DomainError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<FaceDescriptor> for Vec<f32> {
    fn from(descriptor: FaceDescriptor) -> Self {
        descriptor.0
    }
}

impl FaceDescriptor {
    pub fn new(values: Vec<f32>) -> Result<Self, DomainError> {
        if values.len() != FACE_DESCRIPTOR_LEN {
            return Err(DomainError::Validation(format!(
                "face descriptor must have {} values, got {}",
                FACE_DESCRIPTOR_LEN,
                values.len()
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(DomainError::Validation(
                "face descriptor contains non-finite values".to_string(),
            ));
        }
        Ok(Self(values))
    }

    /// Parse the JSON array string form the backend stores.
    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        let values: Vec<f32> = serde_json::from_str(raw)
            .map_err(|e| DomainError::Decode(format!("invalid face descriptor: {}", e)))?;
        Self::new(values)
    }

    pub fn to_json(&self) -> String {
        // Vec<f32> of finite values always serializes
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn values(&self) -> &[f32] {
        &self.0
    }

    /// Both sides always hold `FACE_DESCRIPTOR_LEN` values.
    pub fn euclidean_distance(&self, other: &FaceDescriptor) -> f32 {
        debug_assert_eq!(self.0.len(), other.0.len());
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f32>()
            .sqrt()
    }
}

/// All known descriptors for one person.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledDescriptors {
    pub label: String,
    pub descriptors: Vec<FaceDescriptor>,
}

impl LabeledDescriptors {
    pub fn new(label: impl Into<String>, descriptors: Vec<FaceDescriptor>) -> Self {
        Self {
            label: label.into(),
            descriptors,
        }
    }

    /// Group `(label, descriptor_json)` rows from `/employees/config/descriptors`.
    ///
    /// Rows that fail to parse are skipped with a warning.
    pub fn from_rows(rows: Vec<(String, String)>) -> Vec<LabeledDescriptors> {
        let mut grouped: Vec<LabeledDescriptors> = Vec::new();
        for (label, raw) in rows {
            let descriptor = match FaceDescriptor::from_json(&raw) {
                Ok(descriptor) => descriptor,
                Err(e) => {
                    tracing::warn!(label = %label, error = %e, "Skipping unreadable face descriptor");
                    continue;
                }
            };
            match grouped.iter_mut().find(|entry| entry.label == label) {
                Some(entry) => entry.descriptors.push(descriptor),
                None => grouped.push(LabeledDescriptors::new(label, vec![descriptor])),
            }
        }
        grouped
    }
}

/// Raw RGBA image handed to the face model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageFrame {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, DomainError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(DomainError::Validation(format!(
                "frame of {}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                rgba.len()
            )));
        }
        Ok(Self { width, height, rgba })
    }
}

/// Best label for a candidate descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceMatch {
    /// `None` when no label is within the threshold
    pub label: Option<String>,
    pub distance: f32,
}

impl FaceMatch {
    pub fn is_known(&self) -> bool {
        self.label.is_some()
    }
}

#[cfg(test)]
pub(crate) fn descriptor_filled(value: f32) -> FaceDescriptor {
    FaceDescriptor(vec![value; FACE_DESCRIPTOR_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_length_rejected() {
        assert!(matches!(
            FaceDescriptor::new(vec![0.0; 3]),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_deserialize_enforces_length() {
        assert!(serde_json::from_str::<FaceDescriptor>("[0.1, 0.2, 0.3]").is_err());

        let raw = serde_json::to_string(&vec![0.25_f32; FACE_DESCRIPTOR_LEN]).unwrap();
        let parsed: FaceDescriptor = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.values().len(), FACE_DESCRIPTOR_LEN);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), raw);
    }

    #[test]
    fn test_distance_between_uniform_vectors() {
        let a = descriptor_filled(0.0);
        let b = descriptor_filled(0.1);
        let expected = (FACE_DESCRIPTOR_LEN as f32 * 0.01).sqrt();
        assert!((a.euclidean_distance(&b) - expected).abs() < 1e-4);
        assert_eq!(a.euclidean_distance(&a), 0.0);
    }

    #[test]
    fn test_rows_grouped_by_label_and_bad_rows_skipped() {
        let good = descriptor_filled(0.2).to_json();
        let rows = vec![
            ("alice".to_string(), good.clone()),
            ("bob".to_string(), "not json".to_string()),
            ("alice".to_string(), good),
        ];
        let grouped = LabeledDescriptors::from_rows(rows);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].descriptors.len(), 2);
    }

    #[test]
    fn test_frame_size_checked() {
        assert!(ImageFrame::new(2, 2, vec![0; 16]).is_ok());
        assert!(ImageFrame::new(2, 2, vec![0; 15]).is_err());
    }
}
