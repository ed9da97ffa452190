/// Fixed instruction sent as the first message of every completion request.
pub const SYSTEM_PROMPT: &str = "You are a helpful multilingual assistant. \
     Respond in the same language as the user's input.";
