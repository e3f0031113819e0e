//! Risk statements and legal disclaimers attached to every simulation

use crate::catalog::{OwnershipMode, ScpiKind};

const BASE_RISKS: [&str; 5] = [
    "Risque de perte en capital : le capital investi n'est ni garanti ni protégé.",
    "Risque de change : en raison de sa stratégie d'investissement, \
     la SCPI pourra détenir certains instruments financiers ou \
     actifs immobiliers soumis à un risque de change.",
    "Risque de liquidité : la SCPI ne garantit pas la revente des \
     parts, ni le retrait, la sortie étant possible dans le cas de \
     l'existence d'une contrepartie.",
    "Risque en matière de durabilité : la SCPI est exposée à des \
     risques de durabilité, définis par le règlement SFDR.",
    "Risque de marché : ce produit ne bénéficie pas de protection \
     contre les aléas du marché ; vous pourriez perdre tout ou \
     partie de votre investissement.",
];

const DISMEMBERMENT_RISK: &str = "Risque spécifique au démembrement : aucun dividende ne sera perçu \
     pendant la durée du démembrement.";

const DISCLAIMERS: [&str; 5] = [
    "Ces calculs prévoient un compte des hypothèses de 25% de fiscalité correspondant à une \
     moyenne calculée en fonction de la fiscalité sur les revenus fonciers et financiers des pays dans \
     lesquels la SCPI investit et évite la double imposition grâce au pacte d'investissement.",
    "Les impôts ont prévu à la source pour la SCPI, pour le compte des associés.",
    "Cette simulation est indicative et ne constitue en aucun cas une garantie de performance.",
    "Les performances passées ne préjugent pas des performances futures.",
    "Cette simulation est proposée à titre indicatif et n'a aucune valeur contractuelle.",
];

/// Risks for an instrument and ownership mode, in display order
///
/// The same base list applies to every SCPI; bare ownership adds the
/// dismemberment risk at the end.
pub fn risks(_scpi: ScpiKind, mode: OwnershipMode) -> Vec<String> {
    let mut risks: Vec<String> = BASE_RISKS.iter().map(|s| s.to_string()).collect();
    if mode == OwnershipMode::Bare {
        risks.push(DISMEMBERMENT_RISK.to_string());
    }
    risks
}

pub fn disclaimers() -> Vec<String> {
    DISCLAIMERS.iter().map(|s| s.to_string()).collect()
}
