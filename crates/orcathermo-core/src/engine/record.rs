use crate::core::document::LogDocument;
use crate::core::extract;
use crate::core::models::record::ThermoRecord;
use crate::core::models::temperature::Temperature;
use crate::core::spectrum::{SpectrumError, VibrationalSpectrum, minimum_from_scan, scan_frequencies};
use tracing::debug;

/// Assembles the record for one document at `temperature`.
///
/// Every field extractor and the minimum check run exactly once. Fields that cannot be
/// located stay absent, so this never fails.
pub fn build_record(document: &LogDocument, temperature: Temperature) -> ThermoRecord {
    build_record_from_scan(document, temperature, &scan_frequencies(document))
}

/// Like [`build_record`], with the minimum check taken from a frequency scan the caller
/// already ran on `document`.
pub fn build_record_from_scan(
    document: &LogDocument,
    temperature: Temperature,
    scan: &Result<VibrationalSpectrum, SpectrumError>,
) -> ThermoRecord {
    debug!(
        "Building record for {:?} at {}",
        document.source(),
        temperature
    );
    ThermoRecord {
        temperature,
        description: extract::extract_description(document),
        method: extract::extract_method(document),
        basis_set: extract::extract_basis_set(document),
        charge: extract::extract_charge(document),
        multiplicity: extract::extract_multiplicity(document),
        is_minimum: minimum_from_scan(scan),
        elec_en: extract::extract_electronic_energy(document),
        zero_point_en: extract::extract_zero_point_energy(document, temperature),
        inner_energy: extract::extract_inner_energy(document, temperature),
        enthalpy: extract::extract_enthalpy(document, temperature),
        entropy: extract::extract_entropy(document, temperature),
        gibbs_free_enthalpy: extract::extract_gibbs_free_enthalpy(document, temperature),
        version: extract::extract_orca_version(document),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::record::FieldValue;

    const SINGLE_POINT: &str = "\
NAME = x
# water molecule
! RHF def2-SVP
* xyz 0 1
FINAL SINGLE POINT ENERGY -76.123456
";

    const FREQUENCY_RUN: &str = "\
                 Program Version 6.0.1 -  RELEASE  -
NAME = /scratch/nh4/job.inp
|  1> # ammonium
|  2> ! UKS PBE0 def2-TZVP Freq
|  3> * xyz 1 1
FINAL SINGLE POINT ENERGY       -56.90000000
-----------------------
VIBRATIONAL FREQUENCIES
-----------------------
   0:         0.00 cm**-1
   1:         0.00 cm**-1
   2:         0.00 cm**-1
   3:         0.00 cm**-1
   4:         0.00 cm**-1
   5:         0.00 cm**-1
   6:      -120.44 cm**-1
   7:      1450.10 cm**-1
------------
NORMAL MODES
------------
--------------------------
THERMOCHEMISTRY AT 298.15K
--------------------------
Electronic energy                ...    -56.91234567 Eh
Zero point energy                ...      0.04812345 Eh
INNER ENERGY
Total thermal energy                    -56.86000000 Eh
ENTHALPY
Total Enthalpy                    ...    -56.85900000 Eh
ENTROPY
Final entropy term                ...      0.02500000 Eh
GIBBS FREE ENTHALPY
Final Gibbs free enthalpy         ...    -56.88400000 Eh
";

    #[test]
    fn single_point_water_record() {
        let doc = LogDocument::from_text(SINGLE_POINT);
        let record = build_record(&doc, Temperature::default());

        assert_eq!(record.description.as_deref(), Some("water_molecule"));
        assert_eq!(record.method.as_deref(), Some("HF"));
        assert_eq!(record.basis_set.as_deref(), Some("def2-SVP"));
        assert_eq!(record.charge, Some(0));
        assert_eq!(record.multiplicity, Some(1));
        assert!(!record.is_ion());
        assert_eq!(record.is_minimum, Some(true));
        assert_eq!(record.elec_en, Some(-76.123456));
        assert_eq!(record.zero_point_en, None);
        assert_eq!(record.inner_energy, None);
        assert_eq!(record.enthalpy, None);
        assert_eq!(record.entropy, None);
        assert_eq!(record.gibbs_free_enthalpy, None);
        assert_eq!(record.version, None);
        assert_eq!(record.get("U298K"), Some(FieldValue::Missing));
    }

    #[test]
    fn frequency_run_record_uses_thermochemistry_block() {
        let doc = LogDocument::from_text(FREQUENCY_RUN);
        let record = build_record(&doc, Temperature::default());

        assert_eq!(record.description.as_deref(), Some("ammonium"));
        assert_eq!(record.method.as_deref(), Some("PBE0"));
        assert_eq!(record.basis_set.as_deref(), Some("def2-TZVP"));
        assert_eq!(record.charge, Some(1));
        assert!(record.is_ion());
        assert_eq!(record.is_minimum, Some(false));
        assert_eq!(record.elec_en, Some(-56.91234567));
        assert_eq!(record.zero_point_en, Some(0.04812345));
        assert_eq!(record.inner_energy, Some(-56.86));
        assert_eq!(record.enthalpy, Some(-56.859));
        assert_eq!(record.entropy, Some(0.025));
        assert_eq!(record.gibbs_free_enthalpy, Some(-56.884));
        assert_eq!(record.version.as_deref(), Some("Orca_6.0.1"));
    }

    #[test]
    fn other_temperature_leaves_scoped_fields_absent() {
        let doc = LogDocument::from_text(FREQUENCY_RUN);
        let record = build_record(&doc, Temperature::new(310.0));

        assert_eq!(record.inner_energy, None);
        assert_eq!(record.gibbs_free_enthalpy, None);
        assert_eq!(record.zero_point_en, None);
        assert_eq!(record.elec_en, Some(-56.91234567));
        assert_eq!(record.keys()[9], "U310K");
    }

    #[test]
    fn absent_charge_is_neutral_but_not_zero() {
        let doc = LogDocument::from_text("NAME = x\n# lonely\n");
        let record = build_record(&doc, Temperature::default());
        assert_eq!(record.charge, None);
        assert!(!record.is_ion());
        assert_eq!(record.get("charge"), Some(FieldValue::Missing));
    }

    #[test]
    fn malformed_frequency_block_leaves_minimum_unknown() {
        let text = format!("{SINGLE_POINT}VIBRATIONAL FREQUENCIES\n   3:  100.00 cm**-1\nNORMAL MODES\n");
        let record = build_record(&LogDocument::from_text(text), Temperature::default());
        assert_eq!(record.is_minimum, None);
        assert_eq!(record.elec_en, Some(-76.123456));
    }

    fn job(first_real: &str, electronic: &str, u: &str, h: &str, s: &str, g: &str) -> String {
        format!(
            "\
VIBRATIONAL FREQUENCIES
   0:         0.00 cm**-1
   1:      {first_real} cm**-1
NORMAL MODES
THERMOCHEMISTRY AT 298.15K
Electronic energy                ...    {electronic} Eh
Zero point energy                ...      0.02000000 Eh
INNER ENERGY
Total thermal energy                    {u} Eh
ENTHALPY
Total Enthalpy                    ...    {h} Eh
ENTROPY
Final entropy term                ...      {s} Eh
GIBBS FREE ENTHALPY
Final Gibbs free enthalpy         ...    {g} Eh
"
        )
    }

    #[test]
    fn multi_job_log_reports_the_final_calculation() {
        let text = format!(
            "{SINGLE_POINT}{}{}",
            job("-150.00", "-76.10000000", "-76.09000000", "-76.08000000", "0.02000000", "-76.10500000"),
            job("150.00", "-76.20000000", "-76.19000000", "-76.18000000", "0.02100000", "-76.20500000"),
        );
        let record = build_record(&LogDocument::from_text(text), Temperature::default());

        assert_eq!(record.is_minimum, Some(true));
        assert_eq!(record.elec_en, Some(-76.2));
        assert_eq!(record.inner_energy, Some(-76.19));
        assert_eq!(record.enthalpy, Some(-76.18));
        assert_eq!(record.entropy, Some(0.021));
        assert_eq!(record.gibbs_free_enthalpy, Some(-76.205));
    }

    #[test]
    fn held_scan_gives_the_same_record() {
        let doc = LogDocument::from_text(FREQUENCY_RUN);
        let scan = scan_frequencies(&doc);
        assert_eq!(
            build_record_from_scan(&doc, Temperature::default(), &scan),
            build_record(&doc, Temperature::default())
        );
    }
}
