// src/main.rs
//
// Calculatrice RPN — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//   ou, avec --expr, évaluation directe en ligne de commande (sans fenêtre)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
///
/// Polices : pas de DejaVu embarquée ici (aucun fichier de police livré avec le projet),
/// on reste sur les polices par défaut d’egui. Le pavé n’utilise que √ ² × ÷ hors ASCII
/// (voir `vue.rs`) ; si l’une s’affiche en “carré”, réintroduire une police embarquée
/// via `egui::FontDefinitions` avant la première frame.
const TITRE_APP: &str = "Calculatrice RPN";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::process::ExitCode;

    use clap::Parser;
    use tracing::{error, info};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    use super::{egui, noyau, AppCalc, TITRE_APP};

    /// Calculatrice : fenêtre egui, ou évaluation directe avec --expr.
    #[derive(Parser, Debug)]
    #[command(name = "calculatrice_rpn")]
    #[command(version)]
    pub struct Args {
        /// Expression à évaluer sans ouvrir de fenêtre (ex: "2(3+4)", "√(16)+3²")
        #[arg(short, long)]
        pub expr: Option<String>,

        /// Avec --expr : aperçu (n’affiche rien si l’expression est incomplète ou invalide)
        #[arg(long, requires = "expr")]
        pub preview: bool,

        /// Niveau de journalisation (écrasé par RUST_LOG)
        #[arg(long, default_value = "warn")]
        pub log_level: String,
    }

    fn setup_logging(level: &str) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    /// Mode ligne de commande : résultat sur stdout, erreur sur stderr + code 1.
    fn evaluer_en_ligne(expr: &str, apercu: bool) -> ExitCode {
        if apercu {
            if let Some(r) = noyau::preview(expr) {
                println!("{r}");
            }
            return ExitCode::SUCCESS;
        }

        match noyau::evaluate(expr) {
            Ok(r) => {
                println!("{r}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Erreur : {e}");
                ExitCode::FAILURE
            }
        }
    }

    pub fn main() -> ExitCode {
        let args = Args::parse();
        setup_logging(&args.log_level);

        if let Some(expr) = args.expr.as_deref() {
            return evaluer_en_ligne(expr, args.preview);
        }

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([360.0, 620.0])
                .with_min_inner_size([320.0, 520.0]),
            ..Default::default()
        };

        info!("ouverture de la fenêtre");
        let res = eframe::run_native(
            TITRE_APP,
            options,
            Box::new(|_cc| Ok(Box::<AppCalc>::default())),
        );

        match res {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("échec eframe: {e}");
                ExitCode::FAILURE
            }
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    natif::main()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
