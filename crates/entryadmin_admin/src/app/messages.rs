//! User-facing toast and prompt texts.

pub const LOAD_PAGE_FAILED: &str = "Error al cargar las preguntas";
pub const POPULATE_FAILED: &str = "Error generando frases";
pub const CLEAR_ALL_PROMPT: &str = "¿Estás seguro de que deseas vaciar todas las preguntas?";
pub const CLEAR_ALL_DONE: &str = "Todas las preguntas han sido eliminadas";
pub const CLEAR_ALL_FAILED: &str = "Error al vaciar las preguntas";
pub const PUBLISHED: &str = "Pregunta publicada correctamente";
pub const UNPUBLISHED: &str = "Pregunta despublicada correctamente";
pub const TOGGLE_FAILED: &str = "Error al actualizar la publicación";
pub const INVALID_ID: &str = "ID de pregunta no válido";
pub const LOAD_ENTRY_FAILED: &str = "Error al cargar la pregunta";
pub const SAVE_FAILED: &str = "Error al guardar la pregunta";
pub const SUBMIT_DONE: &str =
    "Solicitud enviada correctamente. Espera la aprobación del administrador.";
pub const SUBMIT_FAILED: &str = "Error al enviar la solicitud";

/// Success toast after a populate request.
pub fn populated(count: usize) -> String {
    format!("{} frases generadas correctamente", count)
}

/// Detail kept in the bulk-action state when populate fails.
pub const POPULATE_FAILED_DETAIL: &str = "Error generando datos fake";
