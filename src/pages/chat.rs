//! Chat Viewer Page
//!
//! Read-only transcript of one client's support conversation, keyed by the
//! `:client_id` route parameter.

use leptos::*;
use leptos_router::{use_navigate, use_params_map};

use crate::components::StatusBadge;
use crate::state::global::ClientStatus;

/// One question/answer message of the transcript
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: u32,
    pub kind: MessageKind,
    pub content: &'static str,
    pub timestamp: &'static str,
}

/// Side of the conversation a message belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    /// Sent by the client
    Question,
    /// Sent by the agent
    Answer,
}

/// Demo transcript shown for every client
fn sample_transcript() -> Vec<Message> {
    use MessageKind::{Answer, Question};

    [
        (Question, "Olá, preciso de ajuda com meu pedido #1234", "14:25"),
        (Answer, "Olá! Claro, posso ajudar. Qual é a sua dúvida sobre o pedido #1234?", "14:26"),
        (Question, "Gostaria de saber quando será entregue", "14:27"),
        (Answer, "Verificando aqui no sistema... Seu pedido está programado para entrega amanhã, entre 9h e 17h.", "14:28"),
        (Question, "Perfeito! É possível escolher um horário específico?", "14:29"),
        (Answer, "Sim! Você pode escolher uma janela de 2 horas. Qual período prefere?", "14:30"),
        (Question, "Prefiro entre 14h e 16h", "14:31"),
        (Answer, "Perfeito! Agendado para amanhã entre 14h e 16h. Você receberá uma notificação 30 minutos antes da entrega.", "14:32"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (kind, content, timestamp))| Message {
        id: i as u32 + 1,
        kind,
        content,
        timestamp,
    })
    .collect()
}

/// Chat viewer page component
#[component]
pub fn ChatViewer() -> impl IntoView {
    let navigate = use_navigate();
    let params = use_params_map();

    let client_id = move || params.with(|p| p.get("client_id").cloned().unwrap_or_default());

    let client_name = "João Silva";
    let client_status = ClientStatus::Open;

    view! {
        <div class="container mx-auto px-6 py-8 max-w-4xl space-y-6">
            // Header
            <header class="flex items-center space-x-4">
                <button
                    on:click=move |_| navigate("/dashboard", Default::default())
                    class="px-4 py-2 text-gray-300 hover:text-white hover:bg-gray-700 rounded-lg transition-colors"
                >
                    "← Voltar à Dashboard"
                </button>
                <div class="border-l border-gray-700 h-8" />
                <div>
                    <h1 class="text-xl font-bold">{client_name}</h1>
                    <div class="flex items-center space-x-2 mt-1">
                        <StatusBadge status=client_status />
                        <span class="text-sm text-gray-400">"ID: " {client_id}</span>
                    </div>
                </div>
            </header>

            // Transcript
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Histórico da Conversa"</h2>

                <div class="space-y-4">
                    {sample_transcript().into_iter().map(|message| {
                        view! { <MessageBubble message=message /> }
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}

/// One transcript bubble: questions on the left, answers on the right
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let is_answer = message.kind == MessageKind::Answer;

    let (row_class, bubble_class, avatar) = if is_answer {
        (
            "flex justify-end",
            "bg-primary-600 text-white rounded-2xl rounded-br-sm",
            "🤖",
        )
    } else {
        (
            "flex justify-start",
            "bg-gray-700 text-gray-100 rounded-2xl rounded-bl-sm",
            "👤",
        )
    };

    view! {
        <div class=row_class>
            <div class=format!(
                "flex gap-3 max-w-[80%] {}",
                if is_answer { "flex-row-reverse" } else { "flex-row" }
            )>
                <div class="w-8 h-8 rounded-full bg-gray-600 flex items-center justify-center flex-shrink-0">
                    {avatar}
                </div>

                <div class="flex flex-col gap-1">
                    <div class=format!("{} px-4 py-3", bubble_class)>
                        <p class="text-sm leading-relaxed">{message.content}</p>
                    </div>
                    <span class=format!(
                        "text-xs text-gray-500 px-2 {}",
                        if is_answer { "text-right" } else { "text-left" }
                    )>
                        {message.timestamp}
                    </span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_alternates_and_is_ordered() {
        let transcript = sample_transcript();
        assert_eq!(transcript.len(), 8);

        for (i, message) in transcript.iter().enumerate() {
            assert_eq!(message.id, i as u32 + 1);
            let expected = if i % 2 == 0 {
                MessageKind::Question
            } else {
                MessageKind::Answer
            };
            assert_eq!(message.kind, expected);
        }
    }
}
