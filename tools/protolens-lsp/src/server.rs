// protolens LSP server implementation

use std::path::PathBuf;

use dashmap::DashMap;
use parking_lot::RwLock;
use protolens_lint::{diagnose, LintDiagnostic, LintError, Linter, Settings};
use protolens_locate::SourceText;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    CodeActionKind, CodeActionOptions, CodeActionOrCommand, CodeActionParams,
    CodeActionProviderCapability, CodeActionResponse, DidChangeConfigurationParams,
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    DidSaveTextDocumentParams, InitializeParams, InitializeResult, InitializedParams, MessageType,
    SaveOptions, ServerCapabilities, ServerInfo, TextDocumentSyncCapability,
    TextDocumentSyncKind, TextDocumentSyncOptions, TextDocumentSyncSaveOptions, Url,
};
use tower_lsp::{Client, LanguageServer};
use tracing::{debug, info, warn};

use crate::convert;

/// Document state tracked by the server
struct Document {
    text: SourceText,
    version: i32,
    /// Diagnostics from the last lint of this version
    diagnostics: Vec<LintDiagnostic>,
}

/// protolens Language Server
pub struct ProtolensServer {
    client: Client,
    documents: DashMap<Url, Document>,
    settings: RwLock<Settings>,
}

impl ProtolensServer {
    pub fn new(client: Client) -> Self {
        ProtolensServer {
            client,
            documents: DashMap::new(),
            settings: RwLock::new(Settings::default()),
        }
    }

    /// Store a snapshot, replacing any earlier one.
    fn store(&self, uri: Url, text: String, version: i32) {
        self.documents.insert(
            uri,
            Document {
                text: SourceText::new(text),
                version,
                diagnostics: Vec::new(),
            },
        );
    }

    /// Lint the stored snapshot of `uri` and publish the result.
    ///
    /// Results for a snapshot that changed while the linter ran are
    /// dropped; the newer snapshot gets its own run.
    async fn lint(&self, uri: Url) {
        let Some((text, version)) = self
            .documents
            .get(&uri)
            .map(|doc| (doc.text.clone(), doc.version))
        else {
            return;
        };
        let linter = Linter::new(self.settings.read().clone());
        let path = uri
            .to_file_path()
            .unwrap_or_else(|()| PathBuf::from(uri.path()));

        debug!(%uri, version, "linting");
        let outcome = tokio::task::spawn_blocking(move || {
            let findings = linter.lint_text(&path, text.as_str())?;
            let diagnostics = diagnose(&text, &findings);
            Ok::<_, LintError>((text, diagnostics))
        })
        .await;

        let outcome = outcome
            .map_err(|error| error.to_string())
            .and_then(|linted| linted.map_err(|error| error.to_string()));
        let (text, diagnostics) = match outcome {
            Ok(result) => result,
            Err(error) => {
                self.report_failure(&uri, &error).await;
                return;
            }
        };

        let published: Vec<_> = diagnostics
            .iter()
            .map(|diagnostic| convert::diagnostic(&text, diagnostic))
            .collect();
        match self.documents.get_mut(&uri) {
            Some(mut doc) if doc.version == version => doc.diagnostics = diagnostics,
            _ => {
                debug!(%uri, version, "dropping stale lint result");
                return;
            }
        }
        self.client
            .publish_diagnostics(uri, published, Some(version))
            .await;
    }

    async fn report_failure(&self, uri: &Url, error: &str) {
        warn!(%uri, error, "lint failed");
        self.client
            .log_message(MessageType::WARNING, format!("protolint failed for {uri}: {error}"))
            .await;
    }

    /// Replace the settings from an editor-provided JSON value.
    async fn apply_settings(&self, value: &serde_json::Value) {
        match Settings::from_value(value) {
            Ok(settings) => {
                info!(executable = %settings.executable.display(), "settings updated");
                *self.settings.write() = settings;
            }
            Err(error) => {
                warn!(%error, "ignoring settings");
                self.client
                    .log_message(MessageType::WARNING, format!("protolens: {error}"))
                    .await;
            }
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for ProtolensServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if let Some(options) = &params.initialization_options {
            self.apply_settings(options).await;
        }
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::FULL),
                        save: Some(TextDocumentSyncSaveOptions::SaveOptions(SaveOptions {
                            include_text: Some(false),
                        })),
                        ..Default::default()
                    },
                )),
                code_action_provider: Some(CodeActionProviderCapability::Options(
                    CodeActionOptions {
                        code_action_kinds: Some(vec![CodeActionKind::QUICKFIX]),
                        ..Default::default()
                    },
                )),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "protolens-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("initialized");
        self.client
            .log_message(MessageType::INFO, "protolens language server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let document = params.text_document;
        self.store(document.uri.clone(), document.text, document.version);
        self.lint(document.uri).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        // Full sync: the last change carries the whole text.
        let Some(change) = params.content_changes.into_iter().last() else {
            return;
        };
        self.store(uri.clone(), change.text, params.text_document.version);
        let lint_on_change = self.settings.read().lint_on_change;
        if lint_on_change {
            self.lint(uri).await;
        }
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        self.lint(params.text_document.uri).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.documents.remove(&uri);
        self.client.publish_diagnostics(uri, Vec::new(), None).await;
    }

    async fn code_action(&self, params: CodeActionParams) -> Result<Option<CodeActionResponse>> {
        let uri = params.text_document.uri;
        let Some(doc) = self.documents.get(&uri) else {
            return Ok(None);
        };
        let mut actions = Vec::new();
        for diagnostic in &doc.diagnostics {
            let published = convert::diagnostic(&doc.text, diagnostic);
            if !convert::intersects(&published.range, &params.range) {
                continue;
            }
            for fix in &diagnostic.fixes {
                let action = convert::code_action(&doc.text, &uri, fix, published.clone());
                actions.push(CodeActionOrCommand::CodeAction(action));
            }
        }
        Ok(Some(actions))
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        self.apply_settings(&params.settings).await;
        let open: Vec<Url> = self.documents.iter().map(|doc| doc.key().clone()).collect();
        for uri in open {
            self.lint(uri).await;
        }
    }
}
