//! Integration test: compose every selection and export it as an SVG snapshot.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use jewelfit_core::{CameraState, Gemstone, JewelryType, Material, Scene, Selection, Viewport};
use jewelfit_export::{SvgMetadata, to_svg};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn every_selection_exports_one_element_per_shape() {
    let camera = CameraState::new();
    for jewelry in JewelryType::ALL {
        for material in Material::ALL {
            for gemstone in Gemstone::ALL {
                let selection = Selection::new(jewelry, material, gemstone);
                let scene = Scene::compose(&selection, &camera, 0.3, Viewport::PREVIEW);
                let title = selection.to_string();
                let svg = to_svg(
                    &scene,
                    &SvgMetadata {
                        title: Some(&title),
                        description: Some("snapshot"),
                    },
                );

                let elements =
                    count(&svg, "<circle") + count(&svg, "<polygon") + count(&svg, "<line");
                assert_eq!(elements, scene.shapes.len(), "{selection}");
                assert_eq!(count(&svg, "<rect"), 1);
                assert!(svg.contains(&format!("<title>{title}</title>")));
                assert!(svg.contains(&material.color().to_string()), "{selection}");
                assert!(svg.contains(&gemstone.color().to_string()), "{selection}");
                assert_eq!(count(&svg, "<svg"), 1);
                assert!(svg.trim_end().ends_with("</svg>"));
            }
        }
    }
}

#[test]
fn snapshot_size_follows_viewport() {
    let scene = Scene::compose(
        &Selection::default(),
        &CameraState::new(),
        0.0,
        Viewport::new(320.0, 240.0),
    );
    let svg = to_svg(&scene, &SvgMetadata::default());
    assert!(svg.contains("width=\"320\""));
    assert!(svg.contains("height=\"240\""));
    assert!(svg.contains("viewBox=\"0 0 320 240\""));
}
