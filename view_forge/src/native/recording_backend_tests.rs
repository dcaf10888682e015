use crate::attributes::RenderAttributes;
use crate::tokens::StringToken;
use crate::world::WorldRegistry;
use super::*;

#[test]
fn test_create_and_destroy_counts() {
    let mut backend = RecordingBackend::new();
    let state = backend.state();

    let mut handle = backend.create_camera_renderer("main", 3).unwrap();
    assert_eq!(state.lock().unwrap().live_handles(), 1);

    handle.destroy();
    let s = state.lock().unwrap();
    assert_eq!(s.created, 1);
    assert_eq!(s.destroyed, 1);
    assert_eq!(s.live_handles(), 0);
    let last = s.last_configured.as_ref().unwrap();
    assert_eq!(last.name, "main");
    assert_eq!(last.camera_id, 3);
}

#[test]
fn test_setters_update_snapshot_and_call_log() {
    let mut worlds = WorldRegistry::new();
    let main = worlds.create("main");

    let mut backend = RecordingBackend::new();
    let state = backend.state();
    let mut handle = backend.create_camera_renderer("main", 0).unwrap();

    handle.clear_scene_worlds();
    handle.add_scene_world(main);
    handle.clear_render_tags();
    handle.add_render_tag(StringToken(1));
    handle.clear_exclude_tags();
    handle.add_exclude_tag(StringToken(2));
    let mut attrs = RenderAttributes::new();
    attrs.set("x", 1);
    handle.set_render_attributes(&attrs);
    handle.render().unwrap();
    handle.destroy();

    let s = state.lock().unwrap();
    assert_eq!(s.calls, vec![
        NativeCall::ClearSceneWorlds,
        NativeCall::AddSceneWorld(main),
        NativeCall::ClearRenderTags,
        NativeCall::AddRenderTag(StringToken(1)),
        NativeCall::ClearExcludeTags,
        NativeCall::AddExcludeTag(StringToken(2)),
        NativeCall::SetRenderAttributes,
        NativeCall::Render,
        NativeCall::Destroy,
    ]);
    assert_eq!(s.renders.len(), 1);
    assert_eq!(s.renders[0].worlds, vec![main]);
    assert_eq!(s.renders[0].render_tags, vec![StringToken(1)]);
    assert_eq!(s.renders[0].exclude_tags, vec![StringToken(2)]);
    assert_eq!(s.renders[0].attributes.len(), 1);
}

#[test]
fn test_clear_resets_snapshot_lists() {
    let mut worlds = WorldRegistry::new();
    let main = worlds.create("main");

    let mut backend = RecordingBackend::new();
    let state = backend.state();
    let mut handle = backend.create_camera_renderer("main", 0).unwrap();

    handle.add_scene_world(main);
    handle.add_render_tag(StringToken(1));
    handle.clear_scene_worlds();
    handle.clear_render_tags();
    handle.destroy();

    let s = state.lock().unwrap();
    let last = s.last_configured.as_ref().unwrap();
    assert!(last.worlds.is_empty());
    assert!(last.render_tags.is_empty());
}

#[test]
fn test_fail_create() {
    let mut backend = RecordingBackend::new();
    backend.set_fail_create(true);
    assert!(backend.create_camera_renderer("main", 0).is_err());
    assert_eq!(backend.state().lock().unwrap().created, 0);
}

#[test]
fn test_fail_render() {
    let mut backend = RecordingBackend::new();
    backend.set_fail_render(true);
    let state = backend.state();
    let mut handle = backend.create_camera_renderer("main", 0).unwrap();

    assert!(handle.render().is_err());
    handle.destroy();
    assert!(state.lock().unwrap().renders.is_empty());
}
