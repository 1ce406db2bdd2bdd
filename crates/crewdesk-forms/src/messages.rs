//! User-facing message strings
//!
//! Every string shown to the user lives here so the validator, the error
//! mapper, and the web layer agree on the exact wording.

/// Shown when a required field is empty.
pub const REQUIRED: &str = "Este campo es obligatorio";

/// Shown when a name-like field contains anything but letters and spaces.
pub const LETTERS_ONLY: &str = "Solo se permiten letras y espacios";

/// Shown at submit time when a phone number is not exactly 10 digits.
pub const PHONE_TEN_DIGITS: &str = "El teléfono debe tener 10 dígitos";

/// Shown while typing when a phone field drifts out of shape.
pub const PHONE_DIGITS_ONLY: &str = "Solo se permiten números (máximo 10 dígitos)";

/// Shown when a salary is negative.
pub const SALARY_NEGATIVE: &str = "El salario no puede ser negativo";

/// Shown when a salary exceeds ten characters.
pub const SALARY_MAX_DIGITS: &str = "Máximo 10 dígitos permitidos";

/// Shown when an email does not have a `local@domain.tld` shape.
pub const EMAIL_INVALID: &str = "Ingrese un email válido";

/// Fallback summary when a server error payload has no usable shape.
pub const UNKNOWN_SERVER_ERROR: &str = "Error desconocido en el servidor";

/// Header line above the bulleted list of field-keyed server errors.
pub const SERVER_ERRORS_HEADER: &str = "Se encontraron los siguientes errores:";

/// Banner shown when client-side validation blocks a submission.
pub const FIX_FORM_ERRORS: &str = "Por favor corrige los errores en el formulario";

/// Banner shown when the employees service cannot be reached at all.
pub const CONNECTION_EMPLOYEES: &str = "Error de conexión con el servidor de empleados";

/// Banner shown when the attendance service cannot be reached at all.
pub const CONNECTION_ATTENDANCE: &str = "Error de conexión con el servidor de asistencias";

/// Shown when attendance is registered without an employee id.
pub const ATTENDANCE_ID_REQUIRED: &str = "Por favor ingresa el ID del empleado";
