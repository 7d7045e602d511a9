use signature_pad::{
    Artifact, ArtifactSink, ContainerMetrics, InputEvent, PadConfig, PointerEvent, SignaturePad,
    ViewportEvents,
};

#[derive(Default)]
struct Recorder {
    calls: Vec<Option<Artifact>>,
}

impl ArtifactSink for Recorder {
    fn on_artifact_change(&mut self, artifact: Option<Artifact>) {
        self.calls.push(artifact);
    }
}

fn mounted(width: usize) -> (SignaturePad<Recorder>, ViewportEvents) {
    let viewport = ViewportEvents::new();
    let mut pad = SignaturePad::new(PadConfig::default(), Recorder::default());
    pad.initialize(ContainerMetrics { width }, &viewport);
    (pad, viewport)
}

fn sign(pad: &mut SignaturePad<Recorder>) {
    pad.begin(&PointerEvent::mouse(10.0, 10.0));
    pad.extend(&PointerEvent::mouse(10.0, 40.0));
    pad.extend(&PointerEvent::mouse(50.0, 40.0));
    pad.end();
}

fn inked(pad: &SignaturePad<Recorder>, x: usize, y: usize) -> bool {
    pad.surface().and_then(|fb| fb.pixel(x, y)).is_some_and(|p| p >> 24 != 0)
}

#[test]
fn given_two_segment_stroke_when_ended_then_one_export_and_signed() {
    let (mut pad, _vp) = mounted(320);
    sign(&mut pad);

    assert!(pad.is_signed());
    assert!(!pad.show_placeholder());
    assert_eq!(pad.sink().calls.len(), 1);
    let artifact = pad.sink().calls[0].as_ref().expect("non-null artifact");
    assert_eq!((artifact.width(), artifact.height()), (320, 200));

    // (10,10) -> (10,40) -> (50,40)
    assert!(inked(&pad, 10, 25));
    assert!(inked(&pad, 30, 40));
    assert!(inked(&pad, 10, 40));
    assert!(!inked(&pad, 30, 25));
    assert!(!inked(&pad, 60, 40));

    // the exported PNG holds the same ink
    let decoded = image::load_from_memory(artifact.png_bytes()).unwrap().to_rgba8();
    assert_eq!(decoded.get_pixel(30, 40)[3], 255);
    assert_eq!(decoded.get_pixel(30, 25)[3], 0);
}

#[test]
fn given_begin_without_extend_when_ended_then_no_export_and_unsigned() {
    let (mut pad, _vp) = mounted(320);
    pad.begin(&PointerEvent::mouse(5.0, 5.0));
    pad.end();
    assert!(!pad.is_signed());
    assert!(pad.show_placeholder());
    assert!(pad.sink().calls.is_empty());
    assert!(!pad.surface().unwrap().has_ink());
}

#[test]
fn given_signed_pad_when_cleared_then_second_export_is_null() {
    let (mut pad, _vp) = mounted(320);
    sign(&mut pad);
    pad.clear();

    let calls = &pad.sink().calls;
    assert_eq!(calls.len(), 2);
    assert!(calls[0].is_some());
    assert!(calls[1].is_none());
    assert!(!pad.is_signed());
    assert!(!pad.surface().unwrap().has_ink());
}

#[test]
fn given_fresh_pad_when_cleared_then_exactly_one_null_export() {
    let (mut pad, _vp) = mounted(100);
    pad.clear();
    assert_eq!(pad.sink().calls, vec![None]);
    assert!(!pad.is_signed());
}

#[test]
fn given_idle_pad_when_extend_then_no_mutation_and_no_export() {
    let (mut pad, _vp) = mounted(100);
    let before = pad.surface().unwrap().clone();
    pad.extend(&PointerEvent::mouse(10.0, 10.0));
    pad.extend(&PointerEvent::mouse(40.0, 40.0));
    pad.end();
    assert_eq!(pad.surface().unwrap(), &before);
    assert!(pad.sink().calls.is_empty());
    assert!(!pad.is_signed());
}

#[test]
fn given_signed_pad_when_resized_then_surface_reallocated_and_no_export() {
    let (mut pad, _vp) = mounted(320);
    sign(&mut pad);
    pad.on_resize(ContainerMetrics { width: 500 });

    let fb = pad.surface().unwrap();
    assert_eq!((fb.width, fb.height), (500, 200));
    assert!(!fb.has_ink());
    assert!(!pad.is_signed());
    assert_eq!(pad.sink().calls.len(), 1); // only the stroke export
}

#[test]
fn given_stroke_when_pointer_leaves_then_it_commits_like_release() {
    let (mut pad, _vp) = mounted(100);
    pad.handle(InputEvent::Down(PointerEvent::mouse(1.0, 1.0)));
    pad.handle(InputEvent::Move(PointerEvent::mouse(30.0, 1.0)));
    pad.handle(InputEvent::Leave);
    pad.handle(InputEvent::Up);
    assert_eq!(pad.sink().calls.len(), 1);
    assert!(!pad.is_drawing());
}

#[test]
fn given_second_empty_gesture_when_ended_then_no_extra_export() {
    let (mut pad, _vp) = mounted(100);
    sign(&mut pad);
    pad.begin(&PointerEvent::mouse(70.0, 70.0));
    pad.end();
    assert_eq!(pad.sink().calls.len(), 1);
    assert!(pad.is_signed());
}

#[test]
fn given_pads_created_and_dropped_when_counting_listeners_then_none_remain() {
    let viewport = ViewportEvents::new();
    {
        let mut a = SignaturePad::new(PadConfig::default(), Recorder::default());
        let mut b = SignaturePad::new(PadConfig::default(), Recorder::default());
        a.initialize(ContainerMetrics { width: 10 }, &viewport);
        b.initialize(ContainerMetrics { width: 20 }, &viewport);
        assert_eq!(viewport.listener_count(), 2);
        a.teardown();
        assert_eq!(viewport.listener_count(), 1);
    }
    assert_eq!(viewport.listener_count(), 0);
}

#[test]
fn given_custom_config_when_initialized_then_height_and_width_follow_it() {
    let cfg = PadConfig::from_json_str(r#"{ "surface_height": 120, "line_width": 6.0 }"#).unwrap();
    let viewport = ViewportEvents::new();
    let mut pad = SignaturePad::new(cfg, Recorder::default());
    pad.initialize(ContainerMetrics { width: 90 }, &viewport);
    pad.begin(&PointerEvent::mouse(10.0, 60.0));
    pad.extend(&PointerEvent::mouse(80.0, 60.0));
    pad.end();
    let fb = pad.surface().unwrap();
    assert_eq!((fb.width, fb.height), (90, 120));
    // 6px wide: rows 57..=62 carry ink at x=40
    assert!(fb.pixel(40, 57).is_some_and(|p| p != 0));
    assert!(fb.pixel(40, 62).is_some_and(|p| p != 0));
    assert!(fb.pixel(40, 64).is_some_and(|p| p == 0));
}

#[test]
fn given_two_pads_on_one_viewport_when_one_is_torn_down_then_resize_reaches_only_the_other() {
    let viewport = ViewportEvents::new();
    let mut kept = SignaturePad::new(PadConfig::default(), Recorder::default());
    let mut gone = SignaturePad::new(PadConfig::default(), Recorder::default());
    kept.initialize(ContainerMetrics { width: 300 }, &viewport);
    gone.initialize(ContainerMetrics { width: 300 }, &viewport);
    sign(&mut kept);
    gone.teardown();

    assert_eq!(viewport.resize(ContainerMetrics { width: 420 }), 1);
    kept.process_viewport_events();
    gone.process_viewport_events();

    let fb = kept.surface().unwrap();
    assert_eq!((fb.width, fb.height), (420, 200));
    assert!(!fb.has_ink());
    assert!(!kept.is_signed());
    assert_eq!(kept.sink().calls.len(), 1); // the stroke only; resizing never exports
    assert!(gone.surface().is_none());
}

#[test]
fn given_pending_viewport_resize_when_next_gesture_starts_then_it_draws_on_the_new_surface() {
    let (mut pad, viewport) = mounted(320);
    viewport.resize(ContainerMetrics { width: 64 });
    sign(&mut pad);
    let fb = pad.surface().unwrap();
    assert_eq!(fb.width, 64);
    assert!(pad.is_signed());
    assert_eq!(pad.sink().calls[0].as_ref().map(Artifact::width), Some(64));
}
