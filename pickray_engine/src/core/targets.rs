use crate::tracing_targets;

tracing_targets! {
    MESH = "mesh",
    PICK = "pick",
    SCENE = "scene",
    RENDER = "render",
}
