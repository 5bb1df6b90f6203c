//! The compiled-in product catalog.
//!
//! Declaration order is display order everywhere (listing, JSON API, home page).

use greenwave_core::ProductId;

use crate::product::{Category, Product, TechnicalSpec};

/// Number of products in the compiled catalog.
pub const PRODUCT_COUNT: usize = 15;

pub static PRODUCTS: [Product; PRODUCT_COUNT] = [
    Product {
        id: ProductId::from_static("ld-films-pro"),
        title: "LD Films Pro",
        description: "Ultra-durable film rolls for heavy-duty construction and agricultural use.",
        full_description: "Our LD Films Pro line provides industry-leading tear and puncture resistance. Manufactured using a proprietary five-layer co-extrusion process, these films ensure maximum protection against environmental stressors and rigorous transport conditions.",
        category: Category::Films,
        image: "/assets/products/LDFilms.webp",
        detail_images: &[
            "/assets/products/LDFilms.webp",
            "/assets/products/HDPEFilm.webp",
            "/assets/products/StretchFilm.jpg",
            "/assets/products/Geomembrane.jpg",
        ],
        features: &[
            "Superior Puncture Resistance (ASTM D1922)",
            "UV Stabilization (5-year outdoor rating)",
            "High Elongation and Stretch Memory",
            "Available in customized colors (MOQ applies)",
        ],
        technical_specs: &[
            TechnicalSpec::new("Material Base", "Low-Density Polyethylene (LDPE)"),
            TechnicalSpec::new("Thickness Range", "2 mil to 10 mil"),
            TechnicalSpec::new("Max Width", "120 inches"),
            TechnicalSpec::new("Tensile Strength (MD)", "3500 PSI"),
            TechnicalSpec::new("Recycled Content", "Available up to 50% PCR"),
            TechnicalSpec::new("Certifications", "ISO 9001, ASTM Certified"),
        ],
    },
    Product {
        id: ProductId::from_static("pet-film-eco"),
        title: "PET Film Eco",
        description: "100% PCR content film with excellent clarity for food packaging.",
        full_description: "The PET Film Eco is engineered using post-consumer recycled (PCR) resin, offering the same exceptional clarity and gas barrier properties as virgin materials. Ideal for sustainable food and consumer goods packaging.",
        category: Category::Films,
        image: "/assets/products/PetFilms.webp",
        detail_images: &[
            "/assets/products/PetFilms.webp",
            "/assets/products/PETResin.jpg",
            "/assets/products/PVCFilm.jpeg",
        ],
        features: &[
            "100% PCR Content",
            "FDA Approved for Food Contact",
            "High Heat Resistance",
            "Excellent Gloss and Transparency",
        ],
        technical_specs: &[
            TechnicalSpec::new("Material Base", "Polyethylene Terephthalate (PET)"),
            TechnicalSpec::new("Thickness Range", "0.5 mil to 3 mil"),
            TechnicalSpec::new("Recycled Content", "100% PCR"),
            TechnicalSpec::new("Heat Tolerance", "Up to 120°C"),
        ],
    },
    Product {
        id: ProductId::from_static("bopp-film-clear"),
        title: "BOPP Film Clear",
        description: "Superior printability and moisture barrier for high-end retail packaging.",
        full_description: "Our Biaxially Oriented Polypropylene (BOPP) Film is the industry standard for lamination and flexible packaging, providing robust protection and a crystal-clear display for premium products.",
        category: Category::Films,
        image: "/assets/products/BOPPFilm.jpeg",
        detail_images: &[
            "/assets/products/BOPPFilm.jpeg",
        ],
        features: &[
            "Exceptional Print Clarity",
            "High Moisture Barrier",
            "Excellent Tear Resistance",
            "Ideal for High-Speed Sealing",
        ],
        technical_specs: &[
            TechnicalSpec::new("Material Base", "Biaxially Oriented Polypropylene (BOPP)"),
            TechnicalSpec::new("Thickness Range", "0.8 mil to 2 mil"),
            TechnicalSpec::new("Surface Treatment", "Corona Treated"),
            TechnicalSpec::new("Applications", "Snacks, Confectionery, Labels"),
        ],
    },
    Product {
        id: ProductId::from_static("pvc-shrink-wrap"),
        title: "PVC Shrink Wrap",
        description: "High-shrink ratio film ideal for bundling and tamper-evident seals.",
        full_description: "Premium PVC shrink wrap designed for high-speed automated packaging, providing a tight, professional finish for product bundling and sealing applications.",
        category: Category::Films,
        image: "/assets/products/PVCFilm.jpeg",
        detail_images: &[
            "/assets/products/PVCFilm.jpeg",
        ],
        features: &[
            "High Shrink Ratio (Up to 50%)",
            "Excellent Clarity and Gloss",
            "Tamper-Evident Security",
            "Low Shrink Temperature",
        ],
        technical_specs: &[
            TechnicalSpec::new("Material Base", "Polyvinyl Chloride (PVC)"),
            TechnicalSpec::new("Shrinkage Rate", "40% MD / 50% TD"),
        ],
    },
    Product {
        id: ProductId::from_static("hdpe-bags-v3"),
        title: "HDPE Bags V3",
        description: "Tear-resistant high-density bags for industrial waste and storage.",
        full_description: "Our Version 3 HDPE industrial bags feature reinforced stress points and a high-molecular weight design, ensuring exceptional tear and load resistance for demanding environments.",
        category: Category::Containers,
        image: "/assets/products/HDPEFilm.webp",
        detail_images: &[
            "/assets/products/HDPEFilm.webp",
        ],
        features: &[
            "Heavy Duty Industrial Grade",
            "Reinforced Seams",
            "High Temperature Tolerance",
        ],
        technical_specs: &[
            TechnicalSpec::new("Material Base", "High-Density Polyethylene (HDPE)"),
            TechnicalSpec::new("Volume Capacity", "50-100 Gallons"),
        ],
    },
    Product {
        id: ProductId::from_static("fibc-bulk-bags"),
        title: "FIBC Bulk Bags",
        description: "Woven polypropylene containers for transporting dry bulk goods safely.",
        full_description: "Flexible Intermediate Bulk Containers (FIBC) built for heavy-duty storage and transportation of dry, granular materials. Certified for safe handling and stacking.",
        category: Category::Containers,
        image: "/assets/products/FIBCBags.jpg",
        detail_images: &[
            "/assets/products/FIBCBags.jpg",
        ],
        features: &[
            "UV Protected Woven PP",
            "Safe Working Load (SWL) 2000 lbs",
            "Lifting Loops (4-Point)",
            "Anti-Static Options Available",
        ],
        technical_specs: &[
            TechnicalSpec::new("Material Base", "Woven Polypropylene (WPP)"),
            TechnicalSpec::new("Safety Factor", "5:1"),
            TechnicalSpec::new("Capacity", "1 Cubic Meter"),
        ],
    },
    Product {
        id: ProductId::from_static("plastic-resin-pp"),
        title: "Plastic Resin PP",
        description: "High-melt-flow polypropylene resin for injection molding applications.",
        full_description: "A high-purity Polypropylene (PP) resin, featuring an optimal melt flow index for fast cycle times in injection molding, commonly used for high-volume consumer goods and automotive parts.",
        category: Category::Resins,
        image: "/assets/products/ResinPP.webp",
        detail_images: &[
            "/assets/products/ResinPP.webp",
        ],
        features: &[
            "High Melt Flow Index (MFI)",
            "Excellent Dimensional Stability",
            "Low Warpage",
            "Fast Cycle Times",
        ],
        technical_specs: &[
            TechnicalSpec::new("Material Base", "Polypropylene (PP)"),
            TechnicalSpec::new("Melt Flow Index (MFI)", "12 g/10 min"),
        ],
    },
    Product {
        id: ProductId::from_static("lldpe-stretch-film"),
        title: "LLDPE Stretch Film",
        description: "Linear low-density polyethylene film for pallet wrapping and stabilization.",
        full_description: "Our Linear Low-Density Polyethylene (LLDPE) film provides superior load retention and tear resistance, ensuring pallets remain stable and protected throughout shipping.",
        category: Category::Films,
        image: "/assets/products/StretchFilm.jpg",
        detail_images: &[
            "/assets/products/StretchFilm.jpg",
        ],
        features: &[
            "High Pre-Stretch Capability",
            "Excellent Cling and Adhesion",
            "Puncture Resistant Formulation",
        ],
        technical_specs: &[
            TechnicalSpec::new("Material Base", "Linear Low-Density Polyethylene (LLDPE)"),
            TechnicalSpec::new("Elongation at Break", "500%"),
        ],
    },
    Product {
        id: ProductId::from_static("biodegradable-pouches"),
        title: "Biodegradable Pouches",
        description: "Compostable laminated pouches for snack foods and organic goods.",
        full_description: "These advanced barrier pouches are made from certified biodegradable and compostable materials, offering a guilt-free packaging solution for perishable food items.",
        category: Category::Containers,
        image: "/assets/products/Pouches.jpg",
        detail_images: &[
            "/assets/products/Pouches.jpg",
        ],
        features: &[
            "Compostable Certification (EN 13432)",
            "High Oxygen Barrier",
            "Tear Notch and Zipper Options",
        ],
        technical_specs: &[
            TechnicalSpec::new("Material Base", "PLA/PBAT Blend"),
            TechnicalSpec::new("Compostability", "Industrial Compostable"),
        ],
    },
    Product {
        id: ProductId::from_static("pet-resin-food"),
        title: "PET Resin Food Grade",
        description: "Virgin PET resin suitable for beverage bottles and food contact materials.",
        full_description: "High-purity, virgin PET resin formulated for clarity and strict food contact compliance, essential for beverage and transparent packaging applications.",
        category: Category::Resins,
        image: "/assets/products/PETResin.jpg",
        detail_images: &[
            "/assets/products/PETResin.jpg",
        ],
        features: &[
            "FDA Approved",
            "Excellent Clarity",
            "Low Acetaldehyde Content",
        ],
        technical_specs: &[
            TechnicalSpec::new("Material Base", "Virgin PET"),
            TechnicalSpec::new("IV Value", "0.80 dl/g"),
        ],
    },
    Product {
        id: ProductId::from_static("metallized-bopp"),
        title: "Metallized BOPP",
        description: "Film with an aluminum layer for enhanced light and oxygen barrier.",
        full_description: "BOPP film enhanced with a thin layer of metallized aluminum, drastically improving moisture, gas, and light barriers, making it ideal for products requiring extended shelf life.",
        category: Category::Films,
        image: "/assets/products/MetalizedBOPP.jpg",
        detail_images: &[
            "/assets/products/MetalizedBOPP.jpg",
        ],
        features: &[
            "High Barrier Properties",
            "Excellent Reflectivity",
            "Vapor Deposited Aluminum",
        ],
        technical_specs: &[
            TechnicalSpec::new("Material Base", "Metallized BOPP"),
            TechnicalSpec::new("Oxygen Barrier", "< 100 cc/m²/day"),
        ],
    },
    Product {
        id: ProductId::from_static("ventilated-fibc"),
        title: "Ventilated FIBC",
        description: "Bags designed to allow airflow, perfect for storing potatoes or logs.",
        full_description: "FIBC bags constructed with breathable fabric panels, allowing continuous air circulation crucial for storing agricultural products like potatoes, onions, and firewood to prevent spoilage.",
        category: Category::Containers,
        image: "/assets/products/VentilatedFIBC.JPG",
        detail_images: &[
            "/assets/products/VentilatedFIBC.JPG",
        ],
        features: &[
            "Breathable Mesh Panels",
            "Reinforced Vents",
            "Anti-Static Options",
        ],
        technical_specs: &[
            TechnicalSpec::new("Material Base", "Woven PP with Venting Strips"),
            TechnicalSpec::new("Safety Factor", "5:1"),
        ],
    },
    Product {
        id: ProductId::from_static("hdpe-geomembrane"),
        title: "HDPE Geomembrane",
        description: "Thick, impermeable liner for civil engineering and environmental containment.",
        full_description: "High-density polyethylene liners providing an impermeable barrier for applications such as landfill lining, mining, and water containment reservoirs.",
        category: Category::Films,
        image: "/assets/products/Geomembrane.jpg",
        detail_images: &[
            "/assets/products/Geomembrane.jpg",
        ],
        features: &[
            "UV Stabilized",
            "Chemical Resistant",
            "Excellent Stress Crack Resistance",
        ],
        technical_specs: &[
            TechnicalSpec::new("Material Base", "High-Density Polyethylene (HDPE)"),
            TechnicalSpec::new("Thickness", "60 mil to 100 mil"),
        ],
    },
    Product {
        id: ProductId::from_static("ldpe-tubing-rolls"),
        title: "LDPE Tubing Rolls",
        description: "Continuous tubing film used for making custom-length plastic bags.",
        full_description: "Flexible, continuous rolls of LDPE film that can be cut and sealed to create custom-sized bags for varied product dimensions, reducing inventory waste.",
        category: Category::Films,
        image: "/assets/products/TubingRolls.jpg",
        detail_images: &[
            "/assets/products/TubingRolls.jpg",
        ],
        features: &[
            "Flexible and Resealable",
            "Clear or Opaque Options",
            "Custom Diameters",
        ],
        technical_specs: &[
            TechnicalSpec::new("Material Base", "Low-Density Polyethylene (LDPE)"),
            TechnicalSpec::new("Roll Length", "1000 ft"),
        ],
    },
    Product {
        id: ProductId::from_static("recycled-abs-resin"),
        title: "Recycled ABS Resin",
        description: "Sustainable acrylonitrile butadiene styrene resin for durable consumer goods.",
        full_description: "High-impact, engineering-grade ABS resin sourced from recycled materials, offering excellent durability and finish for non-critical structural components and consumer housing.",
        category: Category::Resins,
        image: "/assets/products/ABSResin.jpg",
        detail_images: &[
            "/assets/products/ABSResin.jpg",
        ],
        features: &[
            "High Impact Strength",
            "Good Surface Finish",
            "Eco-Friendly Sourcing",
        ],
        technical_specs: &[
            TechnicalSpec::new("Material Base", "Recycled Acrylonitrile Butadiene Styrene (ABS)"),
            TechnicalSpec::new("Melt Flow Index (MFI)", "8 g/10 min"),
        ],
    },
];
