//! Built-in CEP ranges keyed by leading digit.
//!
//! Entries keep the order of the source table. Labels repeat and ranges
//! overlap in places (digit `0`, "DF Cidades-Satélites" under digit `7`);
//! lookups resolve to the first matching entry, so reordering or merging
//! rows changes which range a label draws from.

use crate::catalog::{RegionEntry, RegionGroup};

/// Ranges for every leading digit, in table order.
pub(crate) static BRAZIL: [RegionGroup; 10] = [
    RegionGroup::new(
        "0",
        &[
            RegionEntry::new("01000000", "05999999", "SP capital e região metropolitana"),
            RegionEntry::new("08000000", "08499999", "SP capital e região metropolitana"),
            RegionEntry::new("06000000", "09999999", "SP Região Metropolitana de São Paulo"),
        ],
    ),
    RegionGroup::new(
        "1",
        &[
            RegionEntry::new("11000000", "11999999", "SP Litoral"),
            RegionEntry::new("12000000", "19999999", "SP Interior"),
        ],
    ),
    RegionGroup::new(
        "2",
        &[
            RegionEntry::new("20000000", "23799999", "RJ Capital"),
            RegionEntry::new("23800000", "26599999", "RJ Região Metropolitana do Rio de Janeiro"),
            RegionEntry::new("26600000", "28999999", "RJ Interior"),
            RegionEntry::new("29000000", "29099999", "Vitória"),
            RegionEntry::new("29100000", "29199999", "ES Região Metropolitana de Vitória"),
            RegionEntry::new("29200000", "29999999", "ES Interior"),
        ],
    ),
    RegionGroup::new(
        "3",
        &[
            RegionEntry::new("30000000", "31999999", "Belo Horizonte"),
            RegionEntry::new("32000000", "34999999", "MG Região Metropolitana de Belo Horizonte"),
            RegionEntry::new("35000000", "39999999", "MG Interior"),
        ],
    ),
    RegionGroup::new(
        "4",
        &[
            RegionEntry::new("40000000", "42599999", "Salvador"),
            RegionEntry::new("42600000", "43999999", "BA Região Metropolitana de Salvador"),
            RegionEntry::new("44000000", "48999999", "BA Interior"),
            RegionEntry::new("49000000", "49099999", "Aracaju"),
            RegionEntry::new("49100000", "49999999", "SE Interior"),
        ],
    ),
    RegionGroup::new(
        "5",
        &[
            RegionEntry::new("50000000", "52999999", "Recife"),
            RegionEntry::new("53000000", "54999999", "PE Região Metropolitana do Recife"),
            RegionEntry::new("55000000", "56999999", "PE Interior"),
            RegionEntry::new("57000000", "57099999", "Maceió"),
            RegionEntry::new("57100000", "57999999", "AL Interior"),
            RegionEntry::new("58000000", "58099999", "João Pessoa"),
            RegionEntry::new("58100000", "58999999", "PB Interior"),
            RegionEntry::new("59000000", "59139999", "Natal"),
            RegionEntry::new("59140000", "59999999", "RN Interior"),
        ],
    ),
    RegionGroup::new(
        "6",
        &[
            RegionEntry::new("60000000", "61599999", "Fortaleza"),
            RegionEntry::new("61600000", "61999999", "CE Região Metropolitana de Fortaleza"),
            RegionEntry::new("62000000", "63999999", "CE Interior"),
            RegionEntry::new("64000000", "64099999", "Teresina"),
            RegionEntry::new("64100000", "64999999", "PI Interior"),
            RegionEntry::new("65000000", "65099999", "São Luís"),
            RegionEntry::new("65100000", "65999999", "MA Interior"),
            RegionEntry::new("66000000", "66999999", "Belém"),
            RegionEntry::new("67000000", "67999999", "PA Região Metropolitana de Belém"),
            RegionEntry::new("68000000", "68899999", "PA Interior"),
            RegionEntry::new("68900000", "68914999", "Macapá"),
            RegionEntry::new("68915000", "68999999", "AP Interior"),
            RegionEntry::new("69000000", "69099999", "Manaus"),
            RegionEntry::new("69100000", "69299999", "AM Interior"),
            RegionEntry::new("69300000", "69339999", "Boa Vista"),
            RegionEntry::new("69340000", "69399999", "RR Interior"),
            RegionEntry::new("69900000", "69920999", "Rio Branco"),
            RegionEntry::new("69921000", "69999999", "AC Interior"),
        ],
    ),
    RegionGroup::new(
        "7",
        &[
            RegionEntry::new("70000000", "70999999", "Brasília"),
            RegionEntry::new("71000000", "72799999", "DF Cidades-Satélites"),
            RegionEntry::new("73000000", "73699999", "DF Cidades-Satélites"),
            RegionEntry::new("74000000", "74899999", "Goiânia"),
            RegionEntry::new("74900000", "75199999", "GO Região Metropolitana de Goiânia"),
            RegionEntry::new("72800000", "72999999", "GO Entorno de Brasília"),
            RegionEntry::new("73700000", "73999999", "GO Interior"),
            RegionEntry::new("75200000", "76799999", "GO Interior"),
            RegionEntry::new("76800000", "76849999", "Porto Velho"),
            RegionEntry::new("76850000", "76999999", "RO Interior"),
            RegionEntry::new("77000000", "77299999", "Palmas"),
            RegionEntry::new("77300000", "77999999", "TO Interior"),
            RegionEntry::new("78000000", "78109999", "Cuiabá"),
            RegionEntry::new("78110000", "78999999", "MT Interior"),
            RegionEntry::new("79000000", "79129999", "Campo Grande"),
            RegionEntry::new("79130000", "79999999", "MS Interior"),
        ],
    ),
    RegionGroup::new(
        "8",
        &[
            RegionEntry::new("80000000", "82999999", "Curitiba"),
            RegionEntry::new("83000000", "83899999", "PR Região Metropolitana de Curitiba"),
            RegionEntry::new("83900000", "87999999", "PR Interior"),
            RegionEntry::new("88000000", "88099999", "Florianópolis"),
            RegionEntry::new("88100000", "88179999", "SC Região Metropolitana de Florianópolis"),
            RegionEntry::new("88180000", "89999999", "SC Interior"),
        ],
    ),
    RegionGroup::new(
        "9",
        &[
            RegionEntry::new("90000000", "91999999", "Porto Alegre"),
            RegionEntry::new("92000000", "94999999", "RS Região Metropolitana de Porto Alegre"),
            RegionEntry::new("95000000", "99999999", "RS Interior"),
        ],
    ),
];
