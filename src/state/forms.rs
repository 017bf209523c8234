#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use serde::Serialize;

/// Validation and authorization failures for the sign-up forms.
///
/// `Display` carries the exact message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Por favor, preencha todos os campos.")]
    MissingFields,
    #[error("As senhas não coincidem.")]
    PasswordMismatch,
    #[error("Você não tem permissão para cadastrar médicos.")]
    NotAuthorized,
}

/// Patient sign-up fields.
///
/// Serializable because an accepted submission is the input contract of
/// the future registration backend; today it is logged and discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PatientSignUpForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl PatientSignUpForm {
    /// Field-presence and password-equality checks, in that order.
    ///
    /// No field has type validation; the phone field accepts arbitrary
    /// text.
    ///
    /// # Errors
    ///
    /// `MissingFields` when a required field is empty,
    /// `PasswordMismatch` when the confirmation differs.
    pub fn validate(&self) -> Result<(), FormError> {
        let required = [&self.name, &self.email, &self.phone, &self.password];
        if required.iter().any(|field| field.is_empty()) {
            return Err(FormError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }

    /// Clear every field, as done after an accepted submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Doctor registration fields, admin-only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DoctorSignUpForm {
    pub name: String,
    pub crm: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
    pub price: String,
    pub password: String,
    pub confirm_password: String,
}

impl DoctorSignUpForm {
    /// Authorization, field-presence, and password-equality checks, in
    /// that order.
    ///
    /// The authorization check runs even when the screen was reachable:
    /// the tab-bar gate and this check are deliberately redundant. CRM,
    /// phone, and price accept arbitrary text.
    ///
    /// # Errors
    ///
    /// `NotAuthorized` when the caller is not admin, `MissingFields`
    /// when a required field is empty, `PasswordMismatch` when the
    /// confirmation differs.
    pub fn validate(&self, is_admin: bool) -> Result<(), FormError> {
        if !is_admin {
            return Err(FormError::NotAuthorized);
        }
        let required = [
            &self.name,
            &self.crm,
            &self.specialty,
            &self.email,
            &self.phone,
            &self.price,
            &self.password,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err(FormError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }

    /// Clear every field, as done after an accepted submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
