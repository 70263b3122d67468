// src/ui/state.rs

use bevy::prelude::Resource;

use crate::annotation::events::RequestSaveAnnotation;
use crate::annotation::{Annotation, Category};

/// Checkbox and comment of one bucket in the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketInput {
    pub checked: bool,
    pub comment: String,
}

/// Widget values of the bucket form. This is view state only; the store
/// receives a plain `RequestSaveAnnotation` built from it.
#[derive(Resource, Debug, Clone, Default)]
pub struct AnnotationFormState {
    pub buckets: [BucketInput; 11],
}

impl AnnotationFormState {
    pub fn bucket_mut(&mut self, category: Category) -> &mut BucketInput {
        &mut self.buckets[category.index()]
    }

    pub fn bucket(&self, category: Category) -> &BucketInput {
        &self.buckets[category.index()]
    }

    /// Clears every bucket, then checks and fills the stored ones.
    pub fn populate(&mut self, annotation: &Annotation) {
        self.buckets = Default::default();
        for (category, comment) in annotation.iter() {
            let bucket = self.bucket_mut(category);
            bucket.checked = true;
            bucket.comment = comment.to_string();
        }
    }

    pub fn any_checked(&self) -> bool {
        self.buckets.iter().any(|b| b.checked)
    }

    pub fn to_save_request(&self) -> RequestSaveAnnotation {
        let mut request = RequestSaveAnnotation::default();
        for category in Category::ALL {
            let bucket = self.bucket(category);
            if bucket.checked {
                request.selections.insert(category);
            }
            if !bucket.comment.is_empty() {
                request.comments.insert(category, bucket.comment.clone());
            }
        }
        request
    }
}
