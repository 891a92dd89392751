//! Shared fixtures for hearth-core integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use hearth_core::slides::{RecordingRenderer, SlideRenderer, WidgetKey};
use hearth_core::{Address, Listing, ListingId, ListingStatus, PropertyType};

/// Listings file shipped with the repository.
pub fn sample_data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .join("listings.json")
}

pub fn listing(id: &str, price: f64, bedrooms: u32, featured: bool) -> Listing {
    Listing {
        id: ListingId::new(id).expect("valid id"),
        title: format!("Listing {id}"),
        address: Address {
            street: format!("{id} Main St"),
            city: "Asheville".to_string(),
            state: "NC".to_string(),
            zip: "28801".to_string(),
        },
        price,
        bedrooms,
        bathrooms: 2.0,
        sqft: 1500.0,
        status: ListingStatus::Active,
        property_type: PropertyType::House,
        images: (1..=3).map(|n| format!("images/{id}-{n}.jpg")).collect(),
        featured,
        mls_number: None,
    }
}

pub fn images(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("images/photo-{i}.jpg")).collect()
}

/// Hands out one [`RecordingRenderer`] per widget and keeps a clone of each
/// for inspection.
#[derive(Debug, Clone, Default)]
pub struct Recorders {
    by_widget: Rc<RefCell<HashMap<WidgetKey, RecordingRenderer>>>,
}

impl Recorders {
    pub fn factory(&self) -> impl FnMut(WidgetKey) -> Box<dyn SlideRenderer> + 'static {
        let by_widget = Rc::clone(&self.by_widget);
        move |key| {
            let recorder = RecordingRenderer::new();
            by_widget.borrow_mut().insert(key, recorder.clone());
            Box::new(recorder)
        }
    }

    pub fn get(&self, key: WidgetKey) -> RecordingRenderer {
        self.by_widget
            .borrow()
            .get(&key)
            .cloned()
            .expect("widget was mounted")
    }

    pub fn contains(&self, key: WidgetKey) -> bool {
        self.by_widget.borrow().contains_key(&key)
    }
}
