use std::path::{Path, PathBuf};

use super::TicketError;

/// Lists the immediate subdirectories of the input folder, sorted by folder
/// name for a deterministic processing order.
///
/// An empty result is not an error, just "nothing to do".
pub fn discover_tickets(input_dir: &Path) -> Result<Vec<PathBuf>, TicketError> {
    let entries = std::fs::read_dir(input_dir).map_err(|e| TicketError::Io {
        path: input_dir.to_path_buf(),
        source: e,
    })?;

    let mut tickets = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TicketError::Io {
            path: input_dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_dir() {
            tickets.push(path);
        }
    }

    tickets.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    Ok(tickets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_lists_only_directories() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("ticket-b")).unwrap();
        std::fs::create_dir(temp.path().join("ticket-a")).unwrap();
        std::fs::write(temp.path().join("stray.txt"), "not a ticket").unwrap();

        let tickets = discover_tickets(temp.path()).unwrap();
        let names: Vec<_> = tickets
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["ticket-a", "ticket-b"]);
    }

    #[test]
    fn test_discover_empty_input_is_ok() {
        let temp = TempDir::new().unwrap();
        let tickets = discover_tickets(temp.path()).unwrap();
        assert!(tickets.is_empty());
    }

    #[test]
    fn test_discover_missing_input_fails() {
        let result = discover_tickets(Path::new("/nonexistent/input"));
        assert!(matches!(result, Err(TicketError::Io { .. })));
    }
}
