use std::collections::HashMap;

use crate::domain::{AppError, Framework};
use crate::ports::{TemplateFile, TemplateStore};

pub const VUE_MAIN: &str = "import { createApp } from 'vue';\n\
import App from './App.vue';\n\
import i18n from '@/locales';\n\
\n\
const app = createApp(App);\n\
app.use(i18n);\n\
app.mount('#app');\n";

pub const REACT_MAIN: &str = "import React from 'react';\n\
import ReactDOM from 'react-dom/client';\n\
import App from './App';\n\
import './locales';\n\
\n\
ReactDOM.createRoot(document.getElementById('root')!).render(<App />);\n";

/// In-memory template store for pipeline tests.
#[derive(Debug, Default)]
pub struct MemoryTemplateStore {
    templates: HashMap<Framework, Vec<TemplateFile>>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Small Vue and React templates wired for i18n.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_file(Framework::Vue, "package.json", VUE_DESCRIPTOR)
            .with_file(Framework::Vue, "README.md", README)
            .with_file(Framework::Vue, "src/main.ts", VUE_MAIN)
            .with_file(Framework::Vue, "src/App.vue", "<template><h1>{{ title }}</h1></template>\n")
            .with_file(Framework::Vue, "src/locales/index.ts", "export default {};\n")
            .with_file(Framework::Vue, "src/locales/en.json", "{\"hello\": \"Hello\"}\n")
            .with_file(Framework::React, "package.json", REACT_DESCRIPTOR)
            .with_file(Framework::React, "README.md", README)
            .with_file(Framework::React, "src/main.tsx", REACT_MAIN)
            .with_file(Framework::React, "src/App.tsx", "export default function App() {}\n")
            .with_file(Framework::React, "src/locales/index.ts", "import i18n from 'i18next';\n")
    }

    pub fn with_file(mut self, framework: Framework, path: &str, content: &str) -> Self {
        let files = self.templates.entry(framework).or_default();
        files.push(TemplateFile { path: path.to_string(), content: content.as_bytes().to_vec() });
        files.sort_by(|a, b| a.path.cmp(&b.path));
        self
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn template_files(&self, framework: Framework) -> Result<Vec<TemplateFile>, AppError> {
        self.templates.get(&framework).cloned().ok_or_else(|| AppError::TemplateNotFound {
            framework: framework.display_name().to_string(),
            location: self.describe(framework),
        })
    }

    fn describe(&self, framework: Framework) -> String {
        format!("<memory>/{}", framework.dir_name())
    }
}

const VUE_DESCRIPTOR: &str = r#"{"name":"vue-template","version":"0.0.0","dependencies":{"vue":"^3.4.0","vue-i18n":"^9.0.0"}}"#;

const REACT_DESCRIPTOR: &str = r#"{"name":"react-template","version":"0.0.0","dependencies":{"i18next":"^23.0.0","i18next-browser-languagedetector":"^7.0.0","react":"^18.2.0","react-dom":"^18.2.0","react-i18next":"^14.0.0"}}"#;

const README: &str = "# template\n\n## Features\n\n- Vite\n- i18n ready\n\n## Internationalization\n\nEdit `src/locales`.\n\n## Scripts\n\n`npm run dev`\n";
