use svgplot_rs::api::{Document, FrameSpec, ROOT_FRAME_ID};
use svgplot_rs::core::Placement;
use svgplot_rs::render::AttributeSet;

fn spec(left: f64) -> FrameSpec {
    FrameSpec::new(Placement::new(left, 10.0, 20.0, 20.0))
}

#[test]
fn root_frame_is_head_of_sequence() {
    let doc = Document::new(600, 400).expect("document");
    assert_eq!(doc.frame_count(), 1);
    assert_eq!(doc.frame_order(), vec![ROOT_FRAME_ID]);
    assert_eq!(doc.frame(doc.root()).id(), ROOT_FRAME_ID);
}

#[test]
fn frames_append_in_creation_order() {
    let mut doc = Document::new(600, 400).expect("document");
    let a = doc
        .add_frame("a", spec(0.0), AttributeSet::new())
        .expect("frame a");
    let b = doc
        .add_frame("b", spec(30.0), AttributeSet::new())
        .expect("frame b");

    assert_eq!(doc.frame_order(), vec![ROOT_FRAME_ID, "a", "b"]);
    assert_eq!(doc.frame(a).id(), "a");
    assert_eq!(doc.frame(b).id(), "b");
}

#[test]
fn creation_order_rules_paint_order_regardless_of_call_site() {
    // Interleaving drawing calls on earlier frames between frame creations
    // must not change the paint order: the sequence is a flat tail-append
    // chain, never a tree.
    let mut doc = Document::new(600, 400).expect("document");
    let a = doc
        .add_frame("a", spec(0.0), AttributeSet::new())
        .expect("frame a");
    doc.frame_mut(a).line(0.0, 0.0, 1.0, 1.0, AttributeSet::new());

    let root = doc.root();
    doc.frame_mut(root).line(0.0, 0.0, 10.0, 10.0, AttributeSet::new());

    doc.add_frame("b", spec(30.0), AttributeSet::new())
        .expect("frame b");

    assert_eq!(doc.frame_order(), vec![ROOT_FRAME_ID, "a", "b"]);
}

#[test]
fn later_frames_render_after_earlier_ones() {
    let mut doc = Document::new(600, 400).expect("document");
    let a = doc
        .add_frame("a", spec(0.0), AttributeSet::new())
        .expect("frame a");
    let b = doc
        .add_frame("b", spec(30.0), AttributeSet::new())
        .expect("frame b");
    doc.frame_mut(a).line(0.0, 0.0, 1.0, 1.0, AttributeSet::new());
    doc.frame_mut(b).line(0.0, 0.0, 1.0, 1.0, AttributeSet::new());

    let svg = doc.render().expect("render");
    let a_at = svg.find(r#"<g id="a">"#).expect("frame a group");
    let b_at = svg.find(r#"<g id="b">"#).expect("frame b group");
    assert!(a_at < b_at);
}

#[test]
fn zero_canvas_is_rejected() {
    let err = Document::new(0, 400).expect_err("invalid canvas");
    assert!(matches!(
        err,
        svgplot_rs::PlotError::InvalidCanvas {
            width: 0,
            height: 400
        }
    ));
}
