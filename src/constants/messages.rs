//! User-facing message strings returned in API responses.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "[!] Usuario no encontrado";
pub const ERR_EMAIL_EXISTS: &str = "[!] El email ya está registrado.";
pub const ERR_DELETE_FAILED: &str = "[!] Error al eliminar el usuario";
pub const ERR_INVALID_USER_ID: &str = "Invalid user ID format";

// Request errors
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";
pub const ERR_INVALID_JSON: &str = "Invalid JSON body";
pub const ERR_INTERNAL: &str = "Internal server error";

// Health
pub const MSG_SERVER_RUNNING: &str = "Server is running";
pub const MSG_DATABASE_UNAVAILABLE: &str = "Database is unavailable";
