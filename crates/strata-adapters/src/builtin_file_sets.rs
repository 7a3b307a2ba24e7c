//! File sets that ship with Strata.
//!
//! [`BuiltinCatalog`] supplies the project skeleton written by `init`, the
//! simulator support added later, and the stub for a custom service. All of
//! them are plain values; nothing is read from disk.

use serde_json::json;
use strata_core::{
    application::ports::FileSetCatalog,
    domain::{FileSet, ServiceName},
};
use uuid::Uuid;

/// Entry point compiled by the project's build.
pub const MAIN: &str = "src/main.ts";

/// Folder reserved for generated files.
pub const GENERATED_DIR: &str = ".devicescript";

/// Library declarations folder, relative to the project root.
const LIBRARY_DIR: &str = ".devicescript/lib";

const IGNORE_FILE: &str = ".gitignore";

const IMPORT_PRELUDE: &str = r#"import * as ds from "@devicescript/core""#;

/// Catalog of the built-in file sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl FileSetCatalog for BuiltinCatalog {
    fn project(&self) -> FileSet {
        project_file_set()
    }

    fn simulator(&self) -> FileSet {
        simulator_file_set()
    }

    fn service(&self, name: &ServiceName) -> FileSet {
        service_file_set(name, service_identifier())
    }

    fn ignore_file(&self) -> &str {
        IGNORE_FILE
    }

    fn ignore_tokens(&self) -> Vec<String> {
        vec!["node_modules".to_string(), GENERATED_DIR.to_string()]
    }
}

/// Random 28-bit service identifier with the high nibble set to `1`.
pub fn service_identifier() -> u32 {
    let random = Uuid::new_v4().as_u128() as u32;
    (random & 0x0fff_ffff) | 0x1000_0000
}

fn project_file_set() -> FileSet {
    FileSet::new("project")
        .with_document(
            "src/tsconfig.json",
            json!({
                "compilerOptions": {
                    "moduleResolution": "node",
                    "target": "es2022",
                    "module": "es2022",
                    "lib": [],
                    "strict": true,
                    "strictNullChecks": false,
                    "strictFunctionTypes": true,
                    "sourceMap": false,
                    "declaration": false,
                    "experimentalDecorators": true,
                    "preserveConstEnums": true,
                    "noImplicitThis": true,
                    "isolatedModules": true,
                    "noImplicitAny": true,
                    "moduleDetection": "force",
                    "types": []
                },
                "include": ["*.ts", format!("../{LIBRARY_DIR}/*.ts")]
            }),
        )
        .with_document(
            ".prettierrc",
            json!({ "arrowParens": "avoid", "semi": false, "tabWidth": 4 }),
        )
        .with_document(
            ".vscode/extensions.json",
            json!({ "recommendations": ["esbenp.prettier-vscode"] }),
        )
        .with_document(
            ".vscode/launch.json",
            json!({
                "version": "0.2.0",
                "configurations": [{
                    "name": "DeviceScript",
                    "type": "devicescript",
                    "request": "launch",
                    "program": format!("${{workspaceFolder}}/{MAIN}"),
                    "deviceId": "${command:deviceScriptSimulator}",
                    "stopOnEntry": false
                }]
            }),
        )
        .with_document("devsconfig.json", json!({}))
        .with_document(
            "package.json",
            json!({
                "version": "0.0.0",
                "private": true,
                "dependencies": {},
                "devDependencies": { "@devicescript/cli": "*" },
                "scripts": {
                    "setup": "devicescript build",
                    "build:devicescript": "devicescript build",
                    "build": "yarn build:devicescript",
                    "watch:devicescript": format!("devicescript devtools {MAIN}"),
                    "watch": "yarn watch:devicescript",
                    "start": "yarn watch"
                }
            }),
        )
        .with_text(
            MAIN,
            format!("{IMPORT_PRELUDE}\n\nds.everyMs(1000, () => {{\n    console.log(\":)\")\n}})\n"),
        )
        .with_text("README.md", PROJECT_README)
}

fn simulator_file_set() -> FileSet {
    FileSet::new("simulator")
        .with_patch(
            ".vscode/launch.json",
            json!({
                "configurations": [{
                    "name": "Sim",
                    "request": "launch",
                    "runtimeArgs": ["-r", "ts-node/register"],
                    "args": ["${workspaceFolder}/sim/app.ts"],
                    "skipFiles": ["<node_internals>/**"],
                    "type": "node",
                    "env": { "TS_NODE_PROJECT": "${workspaceFolder}/sim/tsconfig.json" }
                }],
                "compounds": [{
                    "name": "DeviceScript+Sim",
                    "configurations": ["DeviceScript", "Sim"],
                    "stopAll": true
                }]
            }),
        )
        .with_patch(
            "package.json",
            json!({
                "devDependencies": {
                    "nodemon": "^2.0.20",
                    "typescript": "^4.9.5",
                    "ts-node": "^10.9.1"
                },
                "scripts": {
                    "build:sim": format!("cd sim && tsc --outDir ../{GENERATED_DIR}/sim"),
                    "build": "yarn build:devicescript && yarn build:sim",
                    "watch:sim": "cd sim && nodemon --watch './**' --ext 'ts,json' --exec 'ts-node ./app.ts --project ./tsconfig.json'",
                    "watch": "yarn watch:devicescript & yarn watch:sim"
                }
            }),
        )
        .with_text("sim/runtime.ts", SIM_RUNTIME)
        .with_text("sim/README.md", SIM_README)
        .with_text("sim/app.ts", "import { bus } from \"./runtime\"\n\n")
        .with_document(
            "sim/tsconfig.json",
            json!({
                "compilerOptions": {
                    "lib": ["es2022", "dom"],
                    "module": "commonjs",
                    "target": "es2022",
                    "strict": true,
                    "esModuleInterop": true,
                    "skipLibCheck": true,
                    "forceConsistentCasingInFileNames": true,
                    "moduleResolution": "node",
                    "resolveJsonModule": true
                },
                "include": ["./*.ts", "../node_modules/*"]
            }),
        )
}

fn service_file_set(name: &ServiceName, identifier: u32) -> FileSet {
    let definition = format!(
        "# {name}\n\n    identifier: 0x{identifier:x}\n    extends: _sensor\n\n\
         Measures {name}.\n\n## Registers\n\n    ro level: u0.16 / @ reading\n\n\
         A measure of {name}.\n"
    );

    FileSet::new(format!("service {}", name.id()))
        .with_text(format!("services/{}.md", name.id()).as_str(), definition)
        .with_text("services/README.md", SERVICES_README)
}

const PROJECT_README: &str = r#"# - project name -

This project uses [DeviceScript](https://microsoft.github.io/devicescript/).

## Project layout

```
.devicescript      generated files, do not edit
src/main.ts        DeviceScript entry point
sim/app.ts         node.js simulation entry point (optional)
services/          custom service definitions (optional)
```

## Getting started

Install node.js 16 or later, then the dependencies:

```bash
yarn install
```

Start the watch build and the developer tools server:

```bash
yarn watch
```

Open the devtools page printed in the terminal to run the simulators or
deploy to hardware, then edit `src/main.ts`.
"#;

const SIM_RUNTIME: &str = r#"import "websocket-polyfill"
import { Blob } from "buffer"
globalThis.Blob = Blob as any
import customServices from "../.devicescript/services.json"
import { createWebSocketBus } from "jacdac-ts"

/**
 * Jacdac bus connected to the local DeviceScript server.
 */
export const bus = createWebSocketBus({
    busOptions: {
        services: customServices as jdspec.ServiceSpec[],
    },
})
"#;

const SIM_README: &str = r#"# Simulators (node.js)

A node.js application that runs next to the DeviceScript debugger and
simulators. It talks to DeviceScript through the Jacdac bus exported by
`runtime.ts`; the entry point is `app.ts`.
"#;

const SERVICES_README: &str = r#"# Services

Custom service definitions live in this folder.

-   [Documentation](http://microsoft.github.io/devicescript/developer/custom-services)
"#;
