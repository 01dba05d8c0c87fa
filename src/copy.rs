// src/copy.rs
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Spanish,
    English,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" | "spanish" | "español" => Ok(Language::Spanish),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("unsupported language '{other}', expected 'es' or 'en'")),
        }
    }
}

/// User-visible strings of the widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetCopy {
    pub language: Language,
    pub title: String,
    pub subtitle: String,
    pub welcome: String,
    pub error: String,
    pub placeholder: String,
    pub send_label: String,
    pub sending_label: String,
}

impl Default for WidgetCopy {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}

impl WidgetCopy {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Spanish => Self::spanish(),
            Language::English => Self::english(),
        }
    }

    pub fn spanish() -> Self {
        Self {
            language: Language::Spanish,
            title: "Indava Chatbot RAG".to_string(),
            subtitle: "Your goals. Our focus.".to_string(),
            welcome: "**¡Bienvenido al Chatbot de Indava!**\n\n\
                Consulta la documentación de Indava en tiempo real gracias a la integración RAG (Retrieval Augmented Generation).\n\n\
                *Escribe tu pregunta sobre procesos, herramientas o cualquier tema de la documentación y obtén respuestas inmediatas sin buscar manualmente.*"
                .to_string(),
            error: "Error al conectar con el servidor.".to_string(),
            placeholder: "Escribe tu mensaje...".to_string(),
            send_label: "Enviar".to_string(),
            sending_label: "Enviando...".to_string(),
        }
    }

    pub fn english() -> Self {
        Self {
            language: Language::English,
            title: "Indava Chatbot RAG".to_string(),
            subtitle: "Your goals. Our focus.".to_string(),
            welcome: "**Welcome to the Indava Chatbot!**\n\n\
                Browse the Indava documentation in real time through RAG (Retrieval Augmented Generation).\n\n\
                *Ask about processes, tools or any documentation topic and get answers right away without searching by hand.*"
                .to_string(),
            error: "Error connecting to the server.".to_string(),
            placeholder: "Type your message...".to_string(),
            send_label: "Send".to_string(),
            sending_label: "Sending...".to_string(),
        }
    }
}
