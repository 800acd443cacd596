// Copyright 2025 binvoke contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::BinvokeError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a BinvokeError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a BinvokeError) -> Self {
        let (suggestion, details) = match error {
            BinvokeError::BinaryNotFound {
                package,
                searched_path,
                candidates,
                ..
            } => {
                let suggestion = Some(format!(
                    "The binaries for '{package}' may not have been downloaded yet. Run the \
                     download step for this package and try again, or run 'binvoke list' to see \
                     which packages are present."
                ));
                let details = Some(format!(
                    "Searched {searched_path} for:\n{}",
                    candidates
                        .iter()
                        .map(|c| format!("  - {c}"))
                        .collect::<Vec<_>>()
                        .join("\n")
                ));
                (suggestion, details)
            }
            BinvokeError::UnsupportedPlatform { .. } => {
                let suggestion = Some(
                    "No prebuilt binaries are published for this host. Binaries are published \
                     for windows, darwin and linux on x86_64, aarch64 and i386."
                        .to_string(),
                );
                (suggestion, None)
            }
            BinvokeError::ConfigFile(msg) | BinvokeError::InvalidConfig(msg) => {
                let suggestion = Some(
                    "Check the syntax of config.toml in your binvoke home directory.".to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            BinvokeError::PermissionDenied(path) => {
                let suggestion = if cfg!(unix) {
                    Some(format!(
                        "Ensure you have read permissions for: {path}"
                    ))
                } else {
                    Some(format!(
                        "Run as Administrator or ensure you have read permissions for: {path}"
                    ))
                };
                (suggestion, None)
            }
            BinvokeError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        if cfg!(unix) {
                            Some("Check file permissions on the storage root.".to_string())
                        } else {
                            Some("Run as Administrator or check file permissions.".to_string())
                        }
                    }
                    std::io::ErrorKind::NotFound => Some(
                        "Ensure the file or directory exists and the path is correct.".to_string(),
                    ),
                    _ => None,
                };
                let details = Some(format!("I/O error: {io_err}"));
                (suggestion, details)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    pub fn with_details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
