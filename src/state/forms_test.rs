use super::*;

fn patient_form() -> PatientSignUpForm {
    PatientSignUpForm {
        name: "Maria Silva".to_owned(),
        email: "maria@exemplo.com".to_owned(),
        phone: "11 91234-5678".to_owned(),
        password: "segredo".to_owned(),
        confirm_password: "segredo".to_owned(),
    }
}

fn doctor_form() -> DoctorSignUpForm {
    DoctorSignUpForm {
        name: "Dr. João Souza".to_owned(),
        crm: "123456".to_owned(),
        specialty: "Cardiologia".to_owned(),
        email: "joao@exemplo.com".to_owned(),
        phone: "11 99876-5432".to_owned(),
        price: "250".to_owned(),
        password: "segredo".to_owned(),
        confirm_password: "segredo".to_owned(),
    }
}

// =============================================================
// Patient form
// =============================================================

#[test]
fn complete_patient_form_is_accepted() {
    assert_eq!(patient_form().validate(), Ok(()));
}

#[test]
fn empty_required_field_is_rejected() {
    let form = PatientSignUpForm {
        phone: String::new(),
        ..patient_form()
    };
    assert_eq!(form.validate(), Err(FormError::MissingFields));
}

#[test]
fn password_mismatch_is_rejected_and_fields_survive() {
    let form = PatientSignUpForm {
        password: "abc".to_owned(),
        confirm_password: "xyz".to_owned(),
        ..patient_form()
    };
    let before = form.clone();
    assert_eq!(form.validate(), Err(FormError::PasswordMismatch));
    // Rejection must not clear anything the user typed.
    assert_eq!(form, before);
}

#[test]
fn empty_confirmation_reads_as_mismatch() {
    let form = PatientSignUpForm {
        confirm_password: String::new(),
        ..patient_form()
    };
    assert_eq!(form.validate(), Err(FormError::PasswordMismatch));
}

#[test]
fn reset_clears_all_patient_fields() {
    let mut form = patient_form();
    form.reset();
    assert_eq!(form, PatientSignUpForm::default());
}

// =============================================================
// Doctor form
// =============================================================

#[test]
fn complete_doctor_form_is_accepted_for_admin() {
    assert_eq!(doctor_form().validate(true), Ok(()));
}

#[test]
fn non_admin_is_rejected_even_with_valid_fields() {
    assert_eq!(doctor_form().validate(false), Err(FormError::NotAuthorized));
}

#[test]
fn authorization_is_checked_before_fields() {
    // An empty form from a non-admin reports the gate, not the fields.
    assert_eq!(
        DoctorSignUpForm::default().validate(false),
        Err(FormError::NotAuthorized)
    );
}

#[test]
fn doctor_form_missing_field_is_rejected() {
    let form = DoctorSignUpForm {
        specialty: String::new(),
        ..doctor_form()
    };
    assert_eq!(form.validate(true), Err(FormError::MissingFields));
}

#[test]
fn doctor_form_password_mismatch_is_rejected() {
    let form = DoctorSignUpForm {
        confirm_password: "outra".to_owned(),
        ..doctor_form()
    };
    assert_eq!(form.validate(true), Err(FormError::PasswordMismatch));
}

#[test]
fn numeric_marked_fields_accept_arbitrary_text() {
    // CRM, phone, and price are numeric-input hints only; validation
    // deliberately does not constrain their contents.
    let form = DoctorSignUpForm {
        crm: "não numérico".to_owned(),
        price: "duzentos".to_owned(),
        ..doctor_form()
    };
    assert_eq!(form.validate(true), Ok(()));
}

#[test]
fn reset_clears_all_doctor_fields() {
    let mut form = doctor_form();
    form.reset();
    assert_eq!(form, DoctorSignUpForm::default());
}

// =============================================================
// Error messages
// =============================================================

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(
        FormError::MissingFields.to_string(),
        "Por favor, preencha todos os campos."
    );
    assert_eq!(
        FormError::PasswordMismatch.to_string(),
        "As senhas não coincidem."
    );
    assert_eq!(
        FormError::NotAuthorized.to_string(),
        "Você não tem permissão para cadastrar médicos."
    );
}
