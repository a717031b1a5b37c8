//! Template module registry.
//!
//! Each module contributes a manifest fragment that is deep-merged into the
//! package manifest. Modules are additive and idempotent: applying the same
//! module twice leaves the manifest unchanged.

use serde_json::{Value, json};

use crate::error::{CliError, CliResult};

/// A template module: an id, a human description, and a manifest fragment.
#[derive(Debug)]
pub struct ModuleDef {
    pub id: &'static str,
    pub description: &'static str,
    fragment: fn() -> Value,
}

impl ModuleDef {
    /// The manifest fragment this module contributes.
    pub fn manifest_fragment(&self) -> Value {
        (self.fragment)()
    }
}

/// All known modules, in default application order.
pub const MODULES: [ModuleDef; 3] = [
    ModuleDef {
        id: "base",
        description: "Base package configuration (ESM, Jest, ESLint, Prettier).",
        fragment: base_fragment,
    },
    ModuleDef {
        id: "hooks",
        description: "Configures git hooks and hook installation scripts.",
        fragment: hooks_fragment,
    },
    ModuleDef {
        id: "release",
        description: "Adds release scripts and a smoke-test publish guard.",
        fragment: release_fragment,
    },
];

/// Ids of every known module, in default order.
pub fn known_ids() -> Vec<&'static str> {
    MODULES.iter().map(|m| m.id).collect()
}

/// Resolve requested module ids against the registry.
///
/// Ids are trimmed; an unknown id is a user error listing the known ids.
pub fn resolve_modules(ids: &[String]) -> CliResult<Vec<&'static ModuleDef>> {
    let mut resolved = Vec::with_capacity(ids.len());
    for id in ids {
        let id = id.trim();
        if id.is_empty() {
            continue;
        }
        let module = MODULES
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| CliError::UnknownModule {
                id: id.to_string(),
                known: known_ids(),
            })?;
        resolved.push(module);
    }
    Ok(resolved)
}

fn base_fragment() -> Value {
    json!({
        "type": "module",
        "main": "./dist/index.js",
        "types": "./dist/index.d.ts",
        "exports": {
            ".": {
                "types": "./dist/index.d.ts",
                "import": "./dist/index.js"
            },
            "./package.json": "./package.json"
        },
        "files": ["dist", "README.md", "LICENSE"],
        "sideEffects": false,
        "keywords": ["packgen", "typescript", "library"],
        "scripts": {
            "build": "tsc -p tsconfig.build.json",
            "test": "node --experimental-vm-modules ./node_modules/jest/bin/jest.js",
            "test:watch": "node --experimental-vm-modules ./node_modules/jest/bin/jest.js --watch",
            "test:coverage": "node --experimental-vm-modules ./node_modules/jest/bin/jest.js --coverage",
            "lint": "eslint \"src/**/*.ts\" \"tests/**/*.ts\"",
            "lint:fix": "npm run lint -- --fix",
            "format": "prettier \"src/**/*.ts\" \"tests/**/*.ts\" --write",
            "format:check": "prettier \"src/**/*.ts\" \"tests/**/*.ts\" --check"
        },
        "publishConfig": {
            "access": "public",
            "provenance": true
        },
        "engines": {
            "node": ">=18"
        }
    })
}

fn hooks_fragment() -> Value {
    json!({
        "scripts": {
            "hooks:install": "node scripts/setup-hooks.cjs",
            "prepare": "npm run build && npm run hooks:install"
        }
    })
}

fn release_fragment() -> Value {
    json!({
        "scripts": {
            "release": "node scripts/release.mjs",
            "prepublishOnly": "npm run build && node scripts/smoke.mjs"
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_ids_are_stable() {
        assert_eq!(known_ids(), vec!["base", "hooks", "release"]);
    }

    #[test]
    fn resolve_trims_and_skips_blank_ids() {
        let modules =
            resolve_modules(&[" base ".into(), "".into(), "release".into()]).unwrap();
        let ids: Vec<_> = modules.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["base", "release"]);
    }

    #[test]
    fn unknown_id_is_a_user_error() {
        let err = resolve_modules(&["extras".into()]).unwrap_err();
        match err {
            CliError::UnknownModule { id, known } => {
                assert_eq!(id, "extras");
                assert_eq!(known, vec!["base", "hooks", "release"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn base_fragment_carries_scripts_and_metadata() {
        let fragment = base_fragment();
        assert_eq!(fragment["type"], "module");
        assert_eq!(fragment["scripts"]["build"], "tsc -p tsconfig.build.json");
        assert_eq!(fragment["engines"]["node"], ">=18");
    }

    #[test]
    fn fragments_merge_idempotently() {
        use packgen_core::domain::PackageManifest;

        let mut manifest = PackageManifest::new("pkg", "0.1.0", "d");
        for module in &MODULES {
            manifest.merge(&module.manifest_fragment());
        }
        let once = manifest.to_json_pretty();
        for module in &MODULES {
            manifest.merge(&module.manifest_fragment());
        }
        assert_eq!(manifest.to_json_pretty(), once);
    }
}
