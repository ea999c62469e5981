use stagecraft_scene::{ObjectKind, SceneState};

use crate::config::{EmitterConfig, ModelFidelity};
use crate::ir::{Block, GroundBlock, LightBlock, LightOrigin, MeshBlock, ModelBlock, ModelRequest, Preamble, Program};
use crate::render::{ProgramRenderer, ThreeJsRenderer};

/// Builds programs from scene snapshots.
///
/// The emitter only reads the scene and keeps no state between calls, so
/// repeated calls on an unchanged scene produce identical output.
#[derive(Debug, Clone, Default)]
pub struct CodeEmitter {
    config: EmitterConfig,
}

impl CodeEmitter {
    #[must_use]
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Emits the program and renders it as three.js source.
    #[must_use]
    pub fn generate(&self, scene: &SceneState) -> String {
        self.generate_with(scene, &ThreeJsRenderer)
    }

    #[must_use]
    pub fn generate_with(&self, scene: &SceneState, renderer: &dyn ProgramRenderer) -> String {
        renderer.render(&self.emit(scene))
    }

    /// Walks the scene and produces the block list.
    #[must_use]
    pub fn emit(&self, scene: &SceneState) -> Program {
        let mut program = Program::new();

        program.push(Block::Preamble(Preamble::default()));
        program.comment("Ground");
        program.push(Block::Ground(GroundBlock::default()));

        program.comment("Lights");
        let light_count = self.emit_lights(scene, &mut program);

        program.comment("Objects");
        let models = self.emit_objects(scene, &mut program);

        if self.config.fidelity == ModelFidelity::DeferredLoader {
            program.comment("Model loading");
            program.push(Block::ModelLoader(models));
        }

        program.comment("Camera controls (WASD movement, mouse look)");
        program.push(Block::Controls(self.config.controls));

        log::debug!(
            "Emitted {} blocks ({} scene lights, {:?} model fidelity)",
            program.len(),
            light_count,
            self.config.fidelity
        );
        program
    }

    /// Returns the number of scene lights emitted; zero means the default pair was used.
    fn emit_lights(&self, scene: &SceneState, program: &mut Program) -> usize {
        let mut count = 0;
        for (index, object, light) in scene
            .iter()
            .filter_map(|(index, _, obj)| obj.as_light().map(|light| (index, obj, light)))
        {
            program.push(Block::Light(LightBlock {
                origin: LightOrigin::Scene(index),
                light_type: light.light_type,
                color: light.color,
                intensity: light.intensity,
                position: object.transform.position,
                cast_shadow: light.light_type.is_positional(),
            }));
            count += 1;
        }

        if count == 0 {
            for light in LightBlock::default_pair() {
                program.push(Block::Light(light));
            }
        }
        count
    }

    /// Emits meshes and models; returns the models the runtime loader must fetch.
    fn emit_objects(&self, scene: &SceneState, program: &mut Program) -> Vec<ModelRequest> {
        let mut requests = Vec::new();

        for (index, _, object) in scene.iter() {
            match &object.kind {
                ObjectKind::Ground | ObjectKind::Light(_) => {}
                ObjectKind::Model(model) => {
                    let block = ModelBlock {
                        index,
                        file_name: model.file_name.clone(),
                        asset_path: self.config.model_path(&model.file_name),
                        transform: object.transform,
                    };
                    match self.config.fidelity {
                        ModelFidelity::CommentStub => program.push(Block::ModelStub(block)),
                        ModelFidelity::DeferredLoader => {
                            requests.push(ModelRequest {
                                index,
                                asset_path: block.asset_path.clone(),
                            });
                            program.push(Block::ModelPlaceholder(block));
                        }
                    }
                }
                ObjectKind::Primitive(mesh) => {
                    let color = mesh.color().unwrap_or_else(|| {
                        log::warn!("Object #{index} has no material, using fallback color");
                        self.config.fallback_color
                    });
                    program.push(Block::Mesh(MeshBlock {
                        index,
                        geometry: mesh.geometry(),
                        color,
                        roughness: self.config.mesh_roughness,
                        metalness: self.config.mesh_metalness,
                        transform: object.transform,
                    }));
                }
            }
        }
        requests
    }
}
