pub static SITE_NAME: &str = "Registrar";
