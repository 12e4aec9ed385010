use crate::QuizApp;
use crate::ui::helpers::COLOR_SHORT_CIRCUIT;
use egui::{Context, Id, Modal, RichText};

/// Alerta de cortocircuito. Bloquea la pantalla; cerrarla no avanza ni reintenta.
pub fn short_circuit_alert(app: &mut QuizApp, ctx: &Context) {
    let modal = Modal::new(Id::new("short_circuit_alert")).show(ctx, |ui| {
        ui.set_max_width(420.0);
        ui.heading("⚡ ¡Cortocircuito!");
        ui.add_space(8.0);
        ui.label(
            RichText::new("Has provocado un cortocircuito: la corriente ha encontrado un camino sin resistencia.")
                .color(COLOR_SHORT_CIRCUIT)
                .strong(),
        );
        ui.add_space(10.0);
        ui.vertical_centered(|ui| ui.button("Cerrar").clicked()).inner
    });
    if modal.inner || modal.should_close() {
        app.close_short_alert();
    }
}

/// Aviso modal: mientras está abierto no se puede pulsar nada debajo.
pub fn notice_window(app: &mut QuizApp, ctx: &Context) {
    let Some(notice) = app.notice.clone() else {
        return;
    };
    let modal = Modal::new(Id::new("notice_window")).show(ctx, |ui| {
        ui.set_max_width(420.0);
        ui.heading(notice.title);
        ui.add_space(8.0);
        ui.label(notice.text);
        ui.add_space(10.0);
        ui.vertical_centered(|ui| ui.button("Aceptar").clicked()).inner
    });
    if modal.inner || modal.should_close() {
        app.dismiss_notice();
    }
}
