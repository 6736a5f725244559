//! Output layout configuration

pub mod layout;

pub use layout::{
    ScaffoldLayout, COMPONENTS_ROOT, REDUX_ROOT, SLICE_EXTENSION, VIEW_EXTENSION,
};
