//! Display language for labels and shell messages.
//!
//! The Portuguese strings are the program's original wording; English is the
//! default.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language used for every user-facing string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English labels and messages
    #[default]
    #[value(alias = "en")]
    English,
    /// Brazilian Portuguese labels and messages
    #[value(aliases = ["pt", "pt-br"])]
    Portuguese,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::English => write!(f, "english"),
            Locale::Portuguese => write!(f, "portuguese"),
        }
    }
}

/// Fixed set of shell messages for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub menu_title: &'static str,
    pub menu_options: [&'static str; 11],
    pub menu_prompt: &'static str,
    pub invalid_option: &'static str,
    pub description_prompt: &'static str,
    pub description_required: &'static str,
    pub priority_prompt: &'static str,
    pub invalid_priority: &'static str,
    pub success: &'static str,
    pub nothing_to_complete: &'static str,
    pub nothing_to_remove: &'static str,
    pub nothing_to_show: &'static str,
    pub queue_empty: &'static str,
    pub no_pending: &'static str,
    pub no_completed: &'static str,
    pub pending_heading: &'static str,
    pub completed_heading: &'static str,
    pub column_description: &'static str,
    pub column_priority: &'static str,
    pub column_status: &'static str,
    pub error_prefix: &'static str,
    pub press_enter: &'static str,
}

static ENGLISH: Messages = Messages {
    menu_title: "TODO LIST",
    menu_options: [
        "Exit",
        "Add task",
        "Mark next task as completed",
        "Remove first task",
        "Show first task",
        "Show next task",
        "List all tasks",
        "List pending tasks only",
        "List completed tasks only",
        "Reverse list order",
        "Clear list",
    ],
    menu_prompt: "Selected option: ",
    invalid_option: "Please choose a valid option.",
    description_prompt: "Task description: ",
    description_required: "The description cannot be empty.",
    priority_prompt: "Task priority",
    invalid_priority: "Please choose a valid priority.",
    success: "Operation completed successfully!",
    nothing_to_complete: "There are no tasks to complete.",
    nothing_to_remove: "There are no tasks to remove.",
    nothing_to_show: "There are no tasks to show.",
    queue_empty: "There are no tasks in the queue.",
    no_pending: "There are no pending tasks in the queue.",
    no_completed: "There are no completed tasks in the queue.",
    pending_heading: "Pending",
    completed_heading: "Completed",
    column_description: "Description",
    column_priority: "Priority",
    column_status: "Status",
    error_prefix: "Error:",
    press_enter: "Press ENTER to continue...",
};

static PORTUGUESE: Messages = Messages {
    menu_title: "TODO LIST",
    menu_options: [
        "Sair",
        "Adicionar tarefa",
        "Marcar próxima tarefa como concluída",
        "Remover primeira tarefa",
        "Exibir primeira tarefa",
        "Exibir próxima tarefa",
        "Listar todas as tarefas",
        "Listar apenas as tarefas pendentes",
        "Listar apenas as tarefas concluídas",
        "Inverter ordem da lista",
        "Limpar lista",
    ],
    menu_prompt: "Opção selecionada: ",
    invalid_option: "Por favor, escolha uma opção válida.",
    description_prompt: "Descrição da Tarefa: ",
    description_required: "A descrição não pode ficar vazia.",
    priority_prompt: "Prioridade da Tarefa",
    invalid_priority: "Por favor, escolha uma prioridade válida.",
    success: "Operação concluída com sucesso!",
    nothing_to_complete: "Não há tarefas para concluir.",
    nothing_to_remove: "Não há tarefas para remover.",
    nothing_to_show: "Não há tarefas para exibir.",
    queue_empty: "Não há notas na fila.",
    no_pending: "Não há notas pendentes na fila.",
    no_completed: "Não há notas concluídas na fila.",
    pending_heading: "Pendentes",
    completed_heading: "Concluídas",
    column_description: "Descrição",
    column_priority: "Prioridade",
    column_status: "Status",
    error_prefix: "Erro:",
    press_enter: "Pressione a tecla ENTER para prosseguir...",
};

impl Locale {
    /// Messages for this locale.
    #[must_use]
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::English => &ENGLISH,
            Locale::Portuguese => &PORTUGUESE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(Locale::default(), Locale::English);
    }

    #[test]
    fn test_messages_differ_per_locale() {
        assert_eq!(Locale::English.messages().success, "Operation completed successfully!");
        assert_eq!(
            Locale::Portuguese.messages().success,
            "Operação concluída com sucesso!"
        );
    }

    #[test]
    fn test_menu_has_exit_first() {
        assert_eq!(Locale::English.messages().menu_options[0], "Exit");
        assert_eq!(Locale::Portuguese.messages().menu_options[0], "Sair");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Locale::Portuguese).unwrap();
        assert_eq!(json, "\"portuguese\"");
        let back: Locale = serde_json::from_str("\"english\"").unwrap();
        assert_eq!(back, Locale::English);
    }

    #[test]
    fn test_value_enum_aliases() {
        assert_eq!(Locale::from_str("pt", true).unwrap(), Locale::Portuguese);
        assert_eq!(Locale::from_str("english", true).unwrap(), Locale::English);
    }
}
