// Host-side check that the web-sys feature list covers the DOM calls the
// wasm build makes. Missing features only show up on the wasm target.

const MANIFEST: &str = include_str!("../Cargo.toml");

fn web_sys_features() -> Vec<&'static str> {
    let start = MANIFEST
        .find("web-sys = {")
        .expect("web-sys dependency in Cargo.toml");
    let block = &MANIFEST[start..];
    let end = block.find(']').expect("closing bracket of the feature list");
    block[..end]
        .split('"')
        .skip(1)
        .step_by(2)
        .collect()
}

#[test]
fn features_cover_the_dom_calls_in_use() {
    let features = web_sys_features();
    let needed = [
        // document.head() for the marquee stylesheet
        "HtmlHeadElement",
        // container size changes that no window event reports
        "ResizeObserver",
        "HtmlCanvasElement",
        "CanvasRenderingContext2d",
        "HtmlVideoElement",
        "HtmlMediaElement",
        "HtmlImageElement",
        "DomTokenList",
        "CssStyleDeclaration",
        "DomRect",
        "KeyboardEvent",
        "MouseEvent",
    ];
    for f in needed {
        assert!(features.contains(&f), "missing web-sys feature {}", f);
    }
}

#[test]
fn no_unused_element_features() {
    let features = web_sys_features();
    // The lightbox close button is a plain HtmlElement.
    assert!(!features.contains(&"HtmlButtonElement"));
    let mut sorted = features.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), features.len(), "duplicate web-sys feature");
}
