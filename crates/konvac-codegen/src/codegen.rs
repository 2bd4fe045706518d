use konvac_ir::{LayerConfig, ObjectConfig, SceneDocument};

use crate::diagnostics::Diagnostic;
use crate::emit::Emitter;
use crate::ident::Ident;
use crate::literal::{map_literal, quote};
use crate::tween::emit_tween;
use crate::CompiledScene;

/// Name of the host binding the stage is mounted on. The host page always
/// defines it; documents cannot change it.
pub const CONTAINER_BINDING: &str = "container";

/// Walks a scene document and emits the program that rebuilds it.
///
/// Order: stage, then per layer its objects, its tweens and the attach to
/// the stage, then one draw and one log line. Each object is fully set up
/// and added to its layer before the layer joins the stage.
pub struct Codegen {
    out: Emitter,
    diagnostics: Vec<Diagnostic>,
}

impl Codegen {
    pub fn new() -> Self {
        Self {
            out: Emitter::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn generate(mut self, doc: &SceneDocument) -> CompiledScene {
        let stage = Ident::Stage;
        self.out.statement(format!(
            "const {stage} = new Konva.Stage({{ container: {CONTAINER_BINDING}, width: {}, height: {} }});",
            doc.stage.width, doc.stage.height
        ));

        for (i, layer) in doc.layers.iter().enumerate() {
            self.gen_layer(i, layer);
        }

        let count = doc.layers.len();
        self.out.statement(format!("{stage}.draw();"));
        self.out.statement(format!(
            "console.log({});",
            quote(&format!("Konva stage rendered with {count} layer(s)"))
        ));

        CompiledScene {
            statements: self.out.into_lines(),
            diagnostics: self.diagnostics,
            layer_count: count,
        }
    }

    fn gen_layer(&mut self, i: usize, layer: &LayerConfig) {
        tracing::debug!(
            layer = i,
            objects = layer.objects.len(),
            animations = layer.animations.len(),
            "compiling layer"
        );
        match &layer.name {
            Some(name) => self.out.comment(&format!("Layer {i}: {name}")),
            None => self.out.comment(&format!("Layer {i}")),
        }

        let ident = Ident::Layer(i);
        self.out.statement(format!("const {ident} = new Konva.Layer();"));

        for (j, object) in layer.objects.iter().enumerate() {
            self.gen_object(i, j, object);
        }
        for (k, anim) in layer.animations.iter().enumerate() {
            emit_tween(&mut self.out, &mut self.diagnostics, i, k, anim);
        }

        self.out.statement(format!("{}.add({ident});", Ident::Stage));
    }

    fn gen_object(&mut self, i: usize, j: usize, object: &ObjectConfig) {
        let ident = Ident::Object(i, j);
        let attrs = map_literal(&object.attrs);
        self.out.statement(format!(
            "const {ident} = new Konva.{}({attrs});",
            object.kind
        ));

        for (event, handler) in &object.listeners {
            self.out
                .statement(format!("{ident}.on({}, {handler});", quote(event)));
        }

        if !object.filters.is_empty() {
            let filters = object
                .filters
                .iter()
                .map(|name| format!("Konva.Filters.{name}"))
                .collect::<Vec<_>>()
                .join(", ");
            self.out.statement(format!("{ident}.filters([{filters}]);"));
        }

        if object.cache {
            self.out.statement(format!("{ident}.cache();"));
        }

        self.out.statement(format!("{}.add({ident});", Ident::Layer(i)));
    }
}

impl Default for Codegen {
    fn default() -> Self {
        Self::new()
    }
}
